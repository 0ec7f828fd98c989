//! Pseudonym generation - masks student identities behind generated names

/// Fixed closed list of adjective-animal phrases
const ANONYMOUS_NAMES: [&str; 15] = [
    "Curious Cat",
    "Silent Owl",
    "Brave Fox",
    "Wise Penguin",
    "Quiet Wolf",
    "Smart Dolphin",
    "Clever Raven",
    "Kind Bear",
    "Swift Eagle",
    "Gentle Deer",
    "Bold Tiger",
    "Calm Panda",
    "Bright Falcon",
    "Noble Lion",
    "Peaceful Dove",
];

/// Generate a pseudonymous display name like "Brave Fox 482"
///
/// Drawn uniformly from the fixed phrase list plus a 0-999 suffix.
/// Collisions are possible and not checked.
pub fn generate_pseudonym() -> String {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    let phrase = ANONYMOUS_NAMES[rng.gen_range(0..ANONYMOUS_NAMES.len())];
    let number: u16 = rng.gen_range(0..1000);
    format!("{phrase} {number}")
}
