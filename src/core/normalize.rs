/// Default logical name of a physical output file.
///
/// Drops the extension, and the content-hash segment before it when
/// `hashed` is set: `app.abcd1234.js` becomes `app`. Names with fewer
/// `.`-separated segments than are dropped come out empty.
pub fn normalize(physical_name: &str, hashed: bool) -> String {
    let strip = if hashed { 2 } else { 1 };
    let segments: Vec<&str> = physical_name.split('.').collect();
    let keep = segments.len().saturating_sub(strip);
    segments[..keep].join(".")
}
