use tiendita_awscheck::{CallerIdentity, CredentialCheck};

/// Diagnostic entrypoint: run the check, print the report, exit normally.
///
/// Every outcome terminates with exit code 0; this command never aborts a
/// surrounding script.
#[tokio::main]
async fn main() {
    let outcome = tiendita_awscheck::check_credentials().await;
    print_outcome(&outcome);
}

fn print_outcome(outcome: &CredentialCheck) {
    match outcome {
        CredentialCheck::Report(report) => {
            match &report.identity {
                CallerIdentity::User {
                    user_name,
                    user_id,
                    arn,
                } => {
                    println!("Credentials are working. Current user:");
                    println!("  - UserName: {user_name}");
                    println!("  - UserId: {user_id}");
                    println!("  - Arn: {arn}");
                    println!("Attached Policies:");
                    for name in &report.attached_policies {
                        println!("  - {name}");
                    }
                    println!("User Groups:");
                    for name in &report.groups {
                        println!("  - {name}");
                    }
                }
                CallerIdentity::Role { role_name } => {
                    println!("Credentials are working. Current role:");
                    println!("  - RoleName: {role_name}");
                }
                CallerIdentity::Unknown { arn } => {
                    println!("Credentials are working. Caller: {arn}");
                }
            }
            println!("Predefined Managed Policies:");
            for name in &report.managed_policies {
                println!("  - {name}");
            }
        }
        CredentialCheck::NoCredentials => println!("No AWS credentials found."),
        CredentialCheck::PartialCredentials => println!("Incomplete AWS credentials found."),
        CredentialCheck::Other(message) => println!("An error occurred: {message}"),
    }
}
