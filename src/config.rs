use clap::Parser;

use crate::error::Result;
use crate::tags::TagFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "asg-find",
    version,
    about = "Find Auto Scaling Groups whose tags match a filter and report their properties"
)]
pub struct Config {
    /// AWS region; falls back to AWS_REGION and the SDK default chain
    #[arg(long, visible_aliases = ["aws-region", "ec2-region"], env = "EC2_REGION")]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Override the Auto Scaling API endpoint
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Static access key id (used together with --aws-secret-key)
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub aws_access_key: Option<String>,

    /// Static secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub aws_secret_key: Option<String>,

    /// Session token for temporary credentials
    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    pub security_token: Option<String>,

    /// Tag to match, as KEY=VALUE (repeatable)
    #[arg(long = "tag", value_name = "KEY=VALUE")]
    pub tags: Vec<String>,

    /// Tags to match, as a JSON object of string values
    #[arg(long, value_name = "JSON")]
    pub tags_json: Option<String>,

    /// Pretty-print the result document
    #[arg(long)]
    pub pretty: bool,

    /// Check mode; the query never changes anything so this only gets logged
    #[arg(long)]
    pub check: bool,

    /// Log format: json or pretty
    #[arg(long, env = "LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Everything the fetcher needs to open a connection.
#[derive(Debug, Clone, Default)]
pub struct ConnectionSettings {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
    pub static_credentials: Option<StaticCredentials>,
}

#[derive(Clone)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &self.session_token.as_ref().map(|_| "** redacted **"))
            .finish()
    }
}

impl Config {
    pub fn from_args() -> Self {
        Self::parse()
    }

    pub fn tag_filter(&self) -> Result<TagFilter> {
        TagFilter::from_sources(&self.tags, self.tags_json.as_deref())
    }

    pub fn connection(&self) -> ConnectionSettings {
        let static_credentials = match (&self.aws_access_key, &self.aws_secret_key) {
            (Some(access_key_id), Some(secret_access_key)) => Some(StaticCredentials {
                access_key_id: access_key_id.clone(),
                secret_access_key: secret_access_key.clone(),
                session_token: self.security_token.clone(),
            }),
            _ => None,
        };

        ConnectionSettings {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
            static_credentials,
        }
    }

    pub fn display(&self) {
        tracing::info!(
            region = ?self.region,
            profile = ?self.profile,
            endpoint_url = ?self.endpoint_url,
            static_credentials = self.aws_access_key.is_some(),
            check_mode = self.check,
            log_format = %self.log_format,
            log_level = %self.log_level,
            "Configuration initialized"
        );

        if self.aws_access_key.is_some() != self.aws_secret_key.is_some() {
            tracing::warn!(
                "Only one of --aws-access-key/--aws-secret-key was given; using the default credential chain"
            );
        }
    }
}
