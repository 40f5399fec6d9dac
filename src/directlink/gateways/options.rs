//! Per-call options for gateway operations

use std::collections::HashMap;

use super::models::{GatewayActionTemplate, GatewayPatchTemplate, GatewayTemplate};

/// Options for `list_gateways`
#[derive(Debug, Clone, Default)]
pub struct ListGatewaysOptions {
    pub headers: HashMap<String, String>,
}

impl ListGatewaysOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Options for `create_gateway`
#[derive(Debug, Clone)]
pub struct CreateGatewayOptions {
    pub gateway_template: GatewayTemplate,
    /// Validate the template server-side without creating anything
    pub check_only: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl CreateGatewayOptions {
    pub fn new(gateway_template: GatewayTemplate) -> Self {
        Self {
            gateway_template,
            check_only: None,
            headers: HashMap::new(),
        }
    }

    pub fn with_check_only(mut self, check_only: bool) -> Self {
        self.check_only = Some(check_only);
        self
    }
}

/// Options for `delete_gateway`
#[derive(Debug, Clone)]
pub struct DeleteGatewayOptions {
    pub id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteGatewayOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for `get_gateway`
#[derive(Debug, Clone)]
pub struct GetGatewayOptions {
    pub id: String,
    pub headers: HashMap<String, String>,
}

impl GetGatewayOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for `update_gateway`
#[derive(Debug, Clone)]
pub struct UpdateGatewayOptions {
    pub id: String,
    pub gateway_patch_template: GatewayPatchTemplate,
    pub headers: HashMap<String, String>,
}

impl UpdateGatewayOptions {
    pub fn new(id: impl Into<String>, gateway_patch_template: GatewayPatchTemplate) -> Self {
        Self {
            id: id.into(),
            gateway_patch_template,
            headers: HashMap::new(),
        }
    }
}

/// Options for `create_gateway_action`
#[derive(Debug, Clone)]
pub struct CreateGatewayActionOptions {
    pub id: String,
    pub action: GatewayActionTemplate,
    pub headers: HashMap<String, String>,
}

impl CreateGatewayActionOptions {
    pub fn new(id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            action: GatewayActionTemplate::new(action),
            headers: HashMap::new(),
        }
    }

    /// Use a fully populated action body
    pub fn with_template(mut self, action: GatewayActionTemplate) -> Self {
        self.action = action;
        self
    }
}

/// Options for `list_gateway_completion_notice`
#[derive(Debug, Clone)]
pub struct ListGatewayCompletionNoticeOptions {
    pub id: String,
    pub headers: HashMap<String, String>,
}

impl ListGatewayCompletionNoticeOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for `create_gateway_completion_notice`
#[derive(Debug, Clone)]
pub struct CreateGatewayCompletionNoticeOptions {
    pub id: String,
    /// Completion notice document (PDF)
    pub upload: Option<Vec<u8>>,
    pub upload_content_type: Option<String>,
    pub headers: HashMap<String, String>,
}

impl CreateGatewayCompletionNoticeOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            upload: None,
            upload_content_type: None,
            headers: HashMap::new(),
        }
    }

    pub fn with_upload(mut self, upload: Vec<u8>, content_type: impl Into<String>) -> Self {
        self.upload = Some(upload);
        self.upload_content_type = Some(content_type.into());
        self
    }
}

/// Options for `list_gateway_letter_of_authorization`
#[derive(Debug, Clone)]
pub struct ListGatewayLetterOfAuthorizationOptions {
    pub id: String,
    pub headers: HashMap<String, String>,
}

impl ListGatewayLetterOfAuthorizationOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for `get_gateway_statistics`
#[derive(Debug, Clone)]
pub struct GetGatewayStatisticsOptions {
    pub id: String,
    /// One of [`super::statistic_type`]
    pub statistic_type: String,
    pub headers: HashMap<String, String>,
}

impl GetGatewayStatisticsOptions {
    pub fn new(id: impl Into<String>, statistic_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            statistic_type: statistic_type.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for `get_gateway_status`
#[derive(Debug, Clone)]
pub struct GetGatewayStatusOptions {
    pub id: String,
    /// One of [`super::status_type`]; all kinds when unset
    pub status_type: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetGatewayStatusOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status_type: None,
            headers: HashMap::new(),
        }
    }

    pub fn with_status_type(mut self, status_type: impl Into<String>) -> Self {
        self.status_type = Some(status_type.into());
        self
    }
}

impl_custom_headers!(
    ListGatewaysOptions,
    CreateGatewayOptions,
    DeleteGatewayOptions,
    GetGatewayOptions,
    UpdateGatewayOptions,
    CreateGatewayActionOptions,
    ListGatewayCompletionNoticeOptions,
    CreateGatewayCompletionNoticeOptions,
    ListGatewayLetterOfAuthorizationOptions,
    GetGatewayStatisticsOptions,
    GetGatewayStatusOptions,
);
