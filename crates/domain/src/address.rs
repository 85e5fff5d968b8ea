/// Replace the local part of `address` with the literal `example`, so
/// that only the domain portion is disclosed to the third-party API.
///
/// The transform affects the outbound request only; cache keys are
/// always derived from the original address.
pub fn obscure_local_part(address: &str) -> String {
    match address.split_once('@') {
        Some((_, rest)) => format!("example@{rest}"),
        // no @ to split on, nothing left to disclose
        None => String::from("example"),
    }
}
