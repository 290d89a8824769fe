//! Operator answers collected during `post-install`

/// The values applied to a freshly scaffolded project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallConfig {
    pub theme: String,
    pub description: String,
    pub sql_host: Option<String>,
    pub sql_name: Option<String>,
}

impl InstallConfig {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_sql_host(mut self, host: Option<String>) -> Self {
        self.sql_host = host;
        self
    }

    #[must_use]
    pub fn with_sql_name(mut self, name: Option<String>) -> Self {
        self.sql_name = name;
        self
    }

    /// Whether either database field was supplied.
    ///
    /// Both keys in `config.yml` are written when this is true, so supplying
    /// only a host clears the database name.
    pub fn has_database(&self) -> bool {
        self.sql_host.is_some() || self.sql_name.is_some()
    }

    /// Application name for the log channel, `App` when no description was given
    pub fn log_channel(&self) -> &str {
        if self.description.is_empty() {
            "App"
        } else {
            &self.description
        }
    }
}
