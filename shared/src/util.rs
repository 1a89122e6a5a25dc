/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a short random resource id: `<prefix>-<6 hex chars>`.
///
/// 24 bits of randomness; uniqueness is ultimately guaranteed by the TEXT
/// primary key, which rejects the rare collision.
pub fn uid(prefix: &str) -> String {
    use rand::Rng;
    let n: u32 = rand::thread_rng().gen_range(0..0x0100_0000);
    format!("{prefix}-{n:06x}")
}
