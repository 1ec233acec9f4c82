//! Pretty output formatting.

use userstore_core::user::User;

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    let verified = match user.email_verified_at {
        Some(at) => format!("verified {}", at.format("%Y-%m-%d %H:%M")),
        None => "not verified".to_string(),
    };
    format!(
        "{}\n  UUID: {}\n  Email: {} ({})\n  Created: {}",
        user.name,
        user.uuid,
        user.email,
        verified,
        user.created_at.format("%Y-%m-%d %H:%M")
    )
}

/// Format users for display.
pub fn format_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }
    let mut output = format!("USERS ({})\n", users.len());
    output.push_str(&"-".repeat(40));
    for user in users {
        output.push_str(&format!("\n{}", format_user(user)));
        output.push('\n');
    }
    output
}
