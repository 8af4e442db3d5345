///
/// Keeps first and last character and hides everything in between
/// behind at least 4 asterisks. Usernames shorter than 2 characters
/// are returned unchanged.
///
pub fn mask_username(username: &str) -> String {
    let chars = username.chars().collect::<Vec<_>>();
    if chars.len() < 2 {
        return username.to_string();
    }

    let first = chars[0];
    let last = chars[chars.len() - 1];
    let middle = "*".repeat(usize::max(chars.len() - 2, 4));

    format!("{first}{middle}{last}")
}
