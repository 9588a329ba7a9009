use egov_core::text::{normalize, tokenize};
use proptest::prelude::*;

#[test]
fn normalize_is_case_and_spacing_insensitive() {
    assert_eq!(normalize("Cấp CCCD"), normalize("cấp   cccd"));
    assert_eq!(normalize("ĐĂNG KÝ KẾT HÔN"), "đăng ký kết hôn");
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "[a-zA-Z0-9àáảãạăằắẳẵặâầấẩẫậèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵđ?;., \t]{0,64}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn tokenize_never_yields_empty_tokens(s in "\\PC{0,64}") {
        prop_assert!(tokenize(&s).iter().all(|t| !t.is_empty()));
    }
}
