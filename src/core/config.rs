// Externally supplied mail-relay configuration.
//
// On the page these come from `<meta name="folio-*">` tags in the document
// head; absence must surface as a typed configuration error before any
// network attempt, never a malformed request.

pub const DEFAULT_FROM_NAME: &str = "Portfolio Contact Form";
pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Clone, Debug, Default)]
pub struct EmailConfig {
    access_key: Option<String>,
    to_email: Option<String>,
    from_name: Option<String>,
}

impl EmailConfig {
    pub fn new(
        access_key: Option<String>,
        to_email: Option<String>,
        from_name: Option<String>,
    ) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            access_key: non_empty(access_key),
            to_email: non_empty(to_email),
            from_name: non_empty(from_name),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.access_key.is_some() && self.to_email.is_some()
    }

    pub fn access_key(&self) -> Option<&str> {
        self.access_key.as_deref()
    }

    pub fn to_email(&self) -> Option<&str> {
        self.to_email.as_deref()
    }

    pub fn from_name(&self) -> &str {
        self.from_name.as_deref().unwrap_or(DEFAULT_FROM_NAME)
    }
}
