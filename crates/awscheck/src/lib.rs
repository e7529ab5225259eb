//! `tiendita-awscheck` — standalone AWS credential introspection.
//!
//! Resolves the ambient caller identity and gathers attached policies, group
//! memberships, and account-scoped managed policies. Independent of the
//! catalog service: this is a diagnostic command, not a startup dependency.
//! The library never prints; the binary decides presentation.

use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;

/// Outcome of a credential check.
///
/// Closed set: every failure mode maps into exactly one variant, and none of
/// them propagates as an error to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialCheck {
    /// Credentials resolved and the identity was introspected.
    Report(IdentityReport),
    /// The provider chain produced no credentials at all.
    NoCredentials,
    /// Static environment credentials are incomplete (one half of the key
    /// pair is missing).
    PartialCredentials,
    /// Credentials resolved but introspection failed; carries the message.
    Other(String),
}

/// Who the ambient credentials resolve to, per STS `GetCallerIdentity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallerIdentity {
    User {
        user_name: String,
        user_id: String,
        arn: String,
    },
    Role {
        role_name: String,
    },
    Unknown {
        arn: String,
    },
}

/// Everything the diagnostic gathers about the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityReport {
    pub identity: CallerIdentity,
    /// Policies attached directly to the user (empty for non-user callers).
    pub attached_policies: Vec<String>,
    /// Groups the user belongs to (empty for non-user callers).
    pub groups: Vec<String>,
    /// AWS-scoped managed policies currently attached in the account.
    pub managed_policies: Vec<String>,
}

/// Run the full check against the ambient AWS environment.
pub async fn check_credentials() -> CredentialCheck {
    let env = EnvCredentials::capture();
    if env.is_partial() {
        return CredentialCheck::PartialCredentials;
    }

    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;

    // Resolve credentials up front so "no credentials" stays distinguishable
    // from a failing service call.
    let Some(provider) = config.credentials_provider() else {
        return CredentialCheck::NoCredentials;
    };
    if provider.provide_credentials().await.is_err() {
        return CredentialCheck::NoCredentials;
    }

    let sts = aws_sdk_sts::Client::new(&config);
    let iam = aws_sdk_iam::Client::new(&config);

    let caller = match sts.get_caller_identity().send().await {
        Ok(out) => out,
        Err(e) => return CredentialCheck::Other(format!("failed to resolve caller identity: {e}")),
    };
    let arn = caller.arn().unwrap_or_default();
    let user_id = caller.user_id().unwrap_or_default();

    match build_report(&iam, classify_arn(arn, user_id)).await {
        Ok(report) => CredentialCheck::Report(report),
        Err(message) => CredentialCheck::Other(message),
    }
}

/// Identity classification, keyed off the caller ARN.
///
/// The display name is the last `/`-segment of the ARN
/// (`arn:aws:iam::123456789012:user/alice` -> `alice`).
fn classify_arn(arn: &str, user_id: &str) -> CallerIdentity {
    let name = arn.rsplit('/').next().unwrap_or(arn).to_string();

    if arn.contains("user") {
        CallerIdentity::User {
            user_name: name,
            user_id: user_id.to_string(),
            arn: arn.to_string(),
        }
    } else if arn.contains("role") {
        CallerIdentity::Role { role_name: name }
    } else {
        CallerIdentity::Unknown {
            arn: arn.to_string(),
        }
    }
}

async fn build_report(
    iam: &aws_sdk_iam::Client,
    identity: CallerIdentity,
) -> Result<IdentityReport, String> {
    let (attached_policies, groups) = match &identity {
        CallerIdentity::User { user_name, .. } => (
            list_attached_user_policies(iam, user_name).await?,
            list_groups_for_user(iam, user_name).await?,
        ),
        _ => (Vec::new(), Vec::new()),
    };

    let managed_policies = list_attached_managed_policies(iam).await?;

    Ok(IdentityReport {
        identity,
        attached_policies,
        groups,
        managed_policies,
    })
}

async fn list_attached_user_policies(
    iam: &aws_sdk_iam::Client,
    user_name: &str,
) -> Result<Vec<String>, String> {
    let out = iam
        .list_attached_user_policies()
        .user_name(user_name)
        .send()
        .await
        .map_err(|e| format!("failed to list attached user policies: {e}"))?;

    Ok(out
        .attached_policies()
        .iter()
        .filter_map(|p| p.policy_name().map(str::to_string))
        .collect())
}

async fn list_groups_for_user(
    iam: &aws_sdk_iam::Client,
    user_name: &str,
) -> Result<Vec<String>, String> {
    let out = iam
        .list_groups_for_user()
        .user_name(user_name)
        .send()
        .await
        .map_err(|e| format!("failed to list groups for user: {e}"))?;

    Ok(out
        .groups()
        .iter()
        .map(|g| g.group_name().to_string())
        .collect())
}

async fn list_attached_managed_policies(iam: &aws_sdk_iam::Client) -> Result<Vec<String>, String> {
    let out = iam
        .list_policies()
        .scope(aws_sdk_iam::types::PolicyScopeType::Aws)
        .only_attached(true)
        .send()
        .await
        .map_err(|e| format!("failed to list managed policies: {e}"))?;

    Ok(out
        .policies()
        .iter()
        .filter_map(|p| p.policy_name().map(str::to_string))
        .collect())
}

/// The static env key pair, as the SDK's environment provider reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EnvCredentials {
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
}

impl EnvCredentials {
    fn capture() -> Self {
        Self {
            access_key_id: non_empty(std::env::var("AWS_ACCESS_KEY_ID").ok()),
            secret_access_key: non_empty(std::env::var("AWS_SECRET_ACCESS_KEY").ok()),
        }
    }

    /// Exactly one half of the key pair present.
    fn is_partial(&self) -> bool {
        self.access_key_id.is_some() != self.secret_access_key.is_some()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
