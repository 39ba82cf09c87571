//! Locale-aware string comparison for table sorting
//!
//! In the browser this defers to `Intl.Collator`, so titles sort the
//! way the user's locale expects. On native targets (unit tests) a
//! diacritic-folding comparison stands in: it matches the collator at
//! primary strength for the Latin-script titles this catalog holds.

use std::cmp::Ordering;

/// Compare two strings by locale order
#[cfg(target_arch = "wasm32")]
pub fn compare_locale(a: &str, b: &str) -> Ordering {
    use wasm_bindgen::JsValue;

    thread_local! {
        static COMPARE: js_sys::Function = js_sys::Intl::Collator::new(
            &js_sys::Array::new(),
            &js_sys::Object::new(),
        )
        .compare();
    }

    COMPARE.with(|compare| {
        let result = compare
            .call2(&JsValue::UNDEFINED, &JsValue::from_str(a), &JsValue::from_str(b))
            .ok()
            .and_then(|v| v.as_f64());
        match result {
            Some(v) if v < 0.0 => Ordering::Less,
            Some(v) if v > 0.0 => Ordering::Greater,
            Some(_) => Ordering::Equal,
            None => fold_compare(a, b),
        }
    })
}

/// Compare two strings by locale order
#[cfg(not(target_arch = "wasm32"))]
pub fn compare_locale(a: &str, b: &str) -> Ordering {
    fold_compare(a, b)
}

/// Primary-strength comparison: case- and diacritic-insensitive, with
/// the raw strings as a deterministic tie-break
fn fold_compare(a: &str, b: &str) -> Ordering {
    fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b))
}

fn fold_key(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).map(fold_char).collect()
}

/// Map accented Latin letters to their base letter. Covers the
/// precomposed Vietnamese range plus the common Latin-1 accents.
fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ'
        | 'ấ' | 'ẩ' | 'ẫ' | 'ậ' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' | 'ë' => 'e',
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ'
        | 'ớ' | 'ở' | 'ỡ' | 'ợ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' | 'û' | 'ü' => 'u',
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
        'đ' => 'd',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diacritics_sort_with_their_base_letter() {
        assert_eq!(compare_locale("Áo khoác", "Quần jean"), Ordering::Less);
        assert_eq!(compare_locale("Đầm", "Váy"), Ordering::Less);
    }

    #[test]
    fn test_case_is_ignored_at_primary_strength() {
        assert_eq!(compare_locale("alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_locale("Beta", "alpha"), Ordering::Greater);
    }

    #[test]
    fn test_equal_strings_compare_equal() {
        assert_eq!(compare_locale("Áo thun", "Áo thun"), Ordering::Equal);
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        // Same folded key, different raw strings
        assert_ne!(compare_locale("Áo", "ao"), Ordering::Equal);
        assert_eq!(
            compare_locale("Áo", "ao"),
            compare_locale("Áo", "ao"),
        );
    }
}
