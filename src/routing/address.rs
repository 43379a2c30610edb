//! The resolved application address of a single request.

use serde::Serialize;

/// Instance name assigned when the URL does not name an instance.
pub const DEFAULT_INSTANCE: &str = "_";

/// Human-readable label shown in place of [`DEFAULT_INSTANCE`].
pub const DEFAULT_INSTANCE_DISPLAY_NAME: &str = "Default";

/// Which application, instance and sub-path a request targets.
///
/// Built once per request by the resolver and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteAddress {
    app_name: String,
    app_instance_name: String,
    sub_path: Option<String>,
    proxy_id_hint: Option<String>,
}

impl RouteAddress {
    pub(crate) fn new(
        app_name: impl Into<String>,
        app_instance_name: impl Into<String>,
        sub_path: Option<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            app_instance_name: app_instance_name.into(),
            sub_path,
            proxy_id_hint: None,
        }
    }

    /// Attach (or clear) the proxy-id hint.
    pub fn with_proxy_id_hint(self, proxy_id_hint: Option<String>) -> Self {
        Self {
            proxy_id_hint,
            ..self
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_instance_name(&self) -> &str {
        &self.app_instance_name
    }

    /// Instance name for display; the default instance reads as "Default".
    pub fn app_instance_display_name(&self) -> &str {
        display_instance_name(&self.app_instance_name)
    }

    /// True when the URL did not name an instance.
    pub fn is_default_instance(&self) -> bool {
        self.app_instance_name == DEFAULT_INSTANCE
    }

    /// Path remaining after the app/instance selector, if any.
    pub fn sub_path(&self) -> Option<&str> {
        self.sub_path.as_deref()
    }

    pub fn proxy_id_hint(&self) -> Option<&str> {
        self.proxy_id_hint.as_deref()
    }
}

/// Map the sentinel instance name to its display label.
///
/// Presentation only; routing always uses the raw name.
pub fn display_instance_name(instance: &str) -> &str {
    if instance == DEFAULT_INSTANCE {
        DEFAULT_INSTANCE_DISPLAY_NAME
    } else {
        instance
    }
}
