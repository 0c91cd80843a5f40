use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav_links: Vec<Link>,
    pub hero: HeroContent,
    pub stats: Vec<Stat>,
    pub harvest: SectionHeading,
    pub products: Vec<Product>,
    pub benefits: Benefits,
    pub banner: Banner,
    pub contact: Contact,
    pub quick_links: Vec<Link>,
    pub copyright: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Brand {
    pub name: String,
    pub accent: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct HeroContent {
    pub badge: String,
    pub headline: String,
    pub headline_accent: String,
    pub lead: String,
    pub cta: String,
    pub image: String,
    pub image_alt: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SectionHeading {
    pub eyebrow: String,
    pub title: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Product {
    pub title: String,
    pub price: String,
    pub description: String,
    pub image: String,
    /// Stagger before the card's entrance animation starts.
    #[serde(default)]
    pub delay_ms: u32,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Benefit {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Benefits {
    pub title: String,
    pub title_accent: String,
    pub intro: String,
    pub items: Vec<Benefit>,
    pub image: String,
    pub image_alt: String,
    pub quote: String,
    pub quote_author: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Banner {
    pub title: String,
    pub text: String,
    pub cta: String,
    pub texture: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Contact {
    pub farm_name: String,
    pub about: String,
    pub address: Vec<String>,
    pub phone: String,
    pub whatsapp: String,
}

impl Contact {
    pub fn order_link(&self, product: Option<&str>) -> String {
        match product {
            Some(title) => whatsapp_link(
                &self.whatsapp,
                Some(&format!("Hello! I'd like to order {}.", title)),
            ),
            None => whatsapp_link(&self.whatsapp, None),
        }
    }
}

pub fn load() -> Result<SiteContent, serde_json::Error> {
    serde_json::from_str(SITE_JSON)
}

/// wa.me wants the bare international number, digits only.
pub fn whatsapp_link(number: &str, message: Option<&str>) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    match message {
        Some(text) => format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text)),
        None => format!("https://wa.me/{}", digits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let site = load().expect("site.json should parse");
        assert_eq!(site.stats.len(), 4);
        assert_eq!(site.benefits.items.len(), 3);
        assert!(site.nav_links.iter().any(|link| link.href == "#fresh"));
    }

    #[test]
    fn product_cards_are_staggered() {
        let site = load().unwrap();
        let delays: Vec<u32> = site.products.iter().map(|p| p.delay_ms).collect();
        assert_eq!(delays, vec![0, 200, 400]);
    }

    #[test]
    fn whatsapp_link_keeps_only_digits() {
        assert_eq!(whatsapp_link("+91 98765 43210", None), "https://wa.me/919876543210");
    }

    #[test]
    fn whatsapp_link_encodes_the_message() {
        assert_eq!(
            whatsapp_link("+91 98765 43210", Some("2 kg & more?")),
            "https://wa.me/919876543210?text=2%20kg%20%26%20more%3F"
        );
    }

    #[test]
    fn product_order_link_names_the_product() {
        let site = load().unwrap();
        let link = site.contact.order_link(Some("Sun-Dried Oyster"));
        assert!(link.starts_with("https://wa.me/919876543210?text="));
        assert!(link.contains("Sun-Dried%20Oyster"));
    }

    #[test]
    fn missing_delay_defaults_to_zero() {
        let product: Product = serde_json::from_str(
            r#"{"title": "t", "price": "p", "description": "d", "image": "i"}"#,
        )
        .unwrap();
        assert_eq!(product.delay_ms, 0);
    }
}
