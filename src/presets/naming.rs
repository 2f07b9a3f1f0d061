/// Brand, material type and subtype read from a system profile file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetName {
    pub brand: String,
    pub material_type: String,
    /// Remaining words joined by single spaces; may be empty.
    pub subtype: String,
}

impl PresetName {
    /// "brand type", plus " subtype" when there is one.
    pub fn display_name(&self) -> String {
        display_name(&self.brand, &self.material_type, &self.subtype)
    }
}

pub(crate) fn display_name(brand: &str, material_type: &str, subtype: &str) -> String {
    if subtype.is_empty() {
        format!("{} {}", brand, material_type)
    } else {
        format!("{} {} {}", brand, material_type, subtype)
    }
}

/// Parse a system profile file name such as `Polymaker PLA Matte @System.json`.
///
/// `brand_dir` is the name of the vendor directory holding the file, or
/// `None` for files directly under the library root. Inside a vendor
/// directory the directory name is the brand, and a leading word repeating
/// it is dropped. At the root the first word is the brand, and a name that
/// is only a brand yields `None`. So does a file name without
/// `system_suffix` or without a material word.
pub fn parse_profile_name(
    file_name: &str,
    brand_dir: Option<&str>,
    system_suffix: &str,
) -> Option<PresetName> {
    let stem = file_name.strip_suffix(system_suffix)?;
    let mut words: Vec<&str> = stem.split_whitespace().collect();

    let brand = match brand_dir.filter(|d| !d.is_empty()) {
        Some(dir) => {
            if words
                .first()
                .is_some_and(|w| w.to_lowercase() == dir.to_lowercase())
            {
                words.remove(0);
            }
            dir.to_string()
        }
        None => {
            if words.len() < 2 {
                return None;
            }
            words.remove(0).to_string()
        }
    };

    let (material_type, rest) = words.split_first()?;

    Some(PresetName {
        brand,
        material_type: material_type.to_string(),
        subtype: rest.join(" "),
    })
}
