/// Brazilian mobile number mask, `(00) 00000-0000`.
pub const PHONE_MASK: &str = "(00) 00000-0000";

const MAX_DIGITS: usize = 11;

/// Formats whatever the user typed against [`PHONE_MASK`]. Non-digits are
/// dropped and literal characters only appear once a digit follows them, so
/// deleting backwards never gets stuck on a separator.
pub fn apply_phone_mask(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DIGITS)
        .collect();

    let mut out = String::with_capacity(PHONE_MASK.len());
    let mut next = digits.iter();
    let mut pending = String::new();

    for slot in PHONE_MASK.chars() {
        if slot == '0' {
            match next.next() {
                Some(d) => {
                    out.push_str(&pending);
                    pending.clear();
                    out.push(*d);
                }
                None => break,
            }
        } else {
            pending.push(slot);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(apply_phone_mask(""), "");
        assert_eq!(apply_phone_mask("abc"), "");
    }

    #[test]
    fn test_partial_numbers() {
        assert_eq!(apply_phone_mask("1"), "(1");
        assert_eq!(apply_phone_mask("11"), "(11");
        assert_eq!(apply_phone_mask("119"), "(11) 9");
        assert_eq!(apply_phone_mask("1197365"), "(11) 97365");
        assert_eq!(apply_phone_mask("11973658"), "(11) 97365-8");
    }

    #[test]
    fn test_full_number() {
        assert_eq!(apply_phone_mask("11973658355"), "(11) 97365-8355");
    }

    #[test]
    fn test_reformats_already_masked_input() {
        assert_eq!(apply_phone_mask("(11) 97365-8355"), "(11) 97365-8355");
        assert_eq!(apply_phone_mask("(11) 97365-"), "(11) 97365");
    }

    #[test]
    fn test_extra_digits_are_dropped() {
        assert_eq!(apply_phone_mask("119736583559999"), "(11) 97365-8355");
    }
}
