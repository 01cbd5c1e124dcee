//! Placeholder ad copy built from a prompt and a scraped brand.
//!
//! No generation logic yet; the text is a fixed template.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCopy {
    pub headline: String,
    pub body: String,
}

/// Fill the template. A missing brand name reads "Your Brand" in the
/// headline and "our brand" in the body.
pub fn generate_ad(prompt: &str, brand_name: Option<&str>) -> AdCopy {
    let headline_brand = brand_name.unwrap_or("Your Brand");
    let body_brand = brand_name.unwrap_or("our brand");
    AdCopy {
        headline: format!("{headline_brand} - {prompt}"),
        body: format!("Engage with {body_brand} now!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_brand() {
        let ad = generate_ad("Summer sale", Some("Acme"));
        assert_eq!(ad.headline, "Acme - Summer sale");
        assert_eq!(ad.body, "Engage with Acme now!");
    }

    #[test]
    fn test_without_brand() {
        let ad = generate_ad("Summer sale", None);
        assert_eq!(ad.headline, "Your Brand - Summer sale");
        assert_eq!(ad.body, "Engage with our brand now!");
    }
}
