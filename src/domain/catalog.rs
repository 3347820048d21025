use crate::domain::errors::EncodeError;

/// Fixed category lists for the three categorical inputs.
///
/// Index position is the categorical encoding used when the model and scaler
/// were fitted. Contents and order MUST match exactly with the training
/// process. Any change here is a breaking change for the model artifact.
pub const BRANDS: &[&str] = &[
    "Acer",
    "Apple",
    "Asus",
    "Chuwi",
    "Dell",
    "Fujitsu",
    "Google",
    "HP",
    "Huawei",
    "LG",
    "Lenovo",
    "MSI",
    "Mediacom",
    "Microsoft",
    "Razer",
    "Samsung",
    "Toshiba",
    "Vero",
    "Xiaomi",
];

pub const TYPE_NAMES: &[&str] = &[
    "2 in 1 Convertible",
    "Gaming",
    "Netbook",
    "Notebook",
    "Ultrabook",
    "Workstation",
];

pub const OS_NAMES: &[&str] = &[
    "Android",
    "Chrome OS",
    "Linux",
    "Mac OS X",
    "No OS",
    "Windows 10",
    "Windows 10 S",
    "Windows 7",
    "macOS",
];

/// Type codes the low-spec dampening policy exempts.
pub const TYPE_GAMING: usize = 1;
pub const TYPE_WORKSTATION: usize = 5;

fn encode(field: &'static str, list: &[&str], name: &str) -> Result<usize, EncodeError> {
    list.iter()
        .position(|entry| *entry == name)
        .ok_or_else(|| EncodeError::UnknownName {
            field,
            value: name.to_string(),
        })
}

fn decode(
    field: &'static str,
    list: &'static [&'static str],
    code: usize,
) -> Result<&'static str, EncodeError> {
    list.get(code).copied().ok_or(EncodeError::CodeOutOfRange {
        field,
        code,
        count: list.len(),
    })
}

pub fn brand_code(name: &str) -> Result<usize, EncodeError> {
    encode("brand", BRANDS, name)
}

pub fn brand_name(code: usize) -> Result<&'static str, EncodeError> {
    decode("brand", BRANDS, code)
}

pub fn type_code(name: &str) -> Result<usize, EncodeError> {
    encode("type", TYPE_NAMES, name)
}

pub fn type_name(code: usize) -> Result<&'static str, EncodeError> {
    decode("type", TYPE_NAMES, code)
}

pub fn os_code(name: &str) -> Result<usize, EncodeError> {
    encode("os", OS_NAMES, name)
}

pub fn os_name(code: usize) -> Result<&'static str, EncodeError> {
    decode("os", OS_NAMES, code)
}
