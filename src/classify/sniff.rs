// ui5-nwabap-deployer/src/classify/sniff.rs

/// Number of leading bytes inspected.
const SAMPLE_LEN: usize = 512;
/// Share (in percent) of suspicious bytes above which content counts as binary.
const SUSPICIOUS_PERCENT: usize = 10;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF32_BE_BOM: &[u8] = &[0x00, 0x00, 0xFE, 0xFF];
const UTF32_LE_BOM: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];
const GB18030_BOM: &[u8] = &[0x84, 0x31, 0x95, 0x33];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Guesses whether `content` is binary by inspecting its first bytes.
///
/// Text encodings announced by a byte order mark are text. Otherwise a null
/// byte, or too many control bytes and bytes outside valid UTF-8 sequences,
/// marks the content as binary.
pub fn is_binary(content: &[u8]) -> bool {
    if content.is_empty() {
        return false;
    }

    let text_boms = [UTF8_BOM, UTF32_BE_BOM, UTF32_LE_BOM, GB18030_BOM];
    if text_boms.iter().any(|bom| content.starts_with(bom)) {
        return false;
    }
    if content.starts_with(PDF_MAGIC) {
        return true;
    }
    if content.starts_with(UTF16_BE_BOM) || content.starts_with(UTF16_LE_BOM) {
        return false;
    }

    let sample = &content[..content.len().min(SAMPLE_LEN)];
    if sample.contains(&0) {
        return true;
    }

    let controls = sample.iter().filter(|&&b| is_control(b)).count();
    let suspicious = controls + invalid_utf8_bytes(sample);

    suspicious * 100 / sample.len() > SUSPICIOUS_PERCENT
}

/// Counts the bytes that are not part of a valid UTF-8 sequence.
///
/// A sequence cut off by the end of the sample is not counted.
fn invalid_utf8_bytes(sample: &[u8]) -> usize {
    let mut invalid = 0;
    let mut rest = sample;
    while let Err(err) = simdutf8::compat::from_utf8(rest) {
        match err.error_len() {
            Some(len) => {
                invalid += len;
                rest = &rest[err.valid_up_to() + len..];
            }
            None => break,
        }
    }
    invalid
}

/// Control bytes that do not show up in text (tab, newlines, form feed etc. do).
fn is_control(b: u8) -> bool {
    b < 0x07 || (0x0E < b && b < 0x20)
}
