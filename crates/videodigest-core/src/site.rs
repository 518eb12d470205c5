//! Static marketing copy for the landing page, header and footer.

/// Product name, split where the logo changes colour.
pub const BRAND_PREFIX: &str = "Video";
/// Second half of the product name, drawn in the accent colour.
pub const BRAND_SUFFIX: &str = "Digest";

/// Anchor id of the "Try It Now" section.
pub const TRY_NOW_ANCHOR: &str = "try-now";

/// Anchor id of the features section.
pub const FEATURES_ANCHOR: &str = "features";

/// A labelled link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

/// Main navigation in the header and mobile menu.
pub const NAV_LINKS: [Link; 4] = [
    Link::new("Home", "/"),
    Link::new("Features", "/#features"),
    Link::new("Pricing", "/pricing"),
    Link::new("About", "/about"),
];

/// Call to action in the header.
pub const TRY_NOW: Link = Link::new("Try Now", "/#try-now");

/// Hero section copy.
pub mod hero {
    pub const HEADLINE: &str = "Extract Key Insights from YouTube Videos";
    pub const BODY: &str = "Save time and get the most important information from any YouTube \
                            video with our AI-powered summary tool. Choose your level of detail \
                            and get instant results.";
    pub const IMAGE_URL: &str =
        "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7?w=800&q=80";
    pub const IMAGE_ALT: &str = "Video summary illustration";
    pub const PRIMARY: super::Link = super::Link::new("Try It Now", "/#try-now");
    pub const SECONDARY: super::Link = super::Link::new("Learn More", "#features");
}

/// Icon shown on a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Clock,
    FileText,
    Zap,
    BarChart,
    Layers,
    Download,
}

/// One card in the features grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Heading of the features section.
pub const FEATURES_HEADING: &str = "Powerful Features";
/// Copy under the features heading.
pub const FEATURES_SUBHEADING: &str =
    "Everything you need to get the most out of your video content";

/// Cards in the features grid, in display order.
pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: FeatureIcon::Clock,
        title: "Save Time",
        description: "Get the key points from long videos in minutes instead of hours.",
    },
    Feature {
        icon: FeatureIcon::FileText,
        title: "Detailed Summaries",
        description: "Choose between brief, standard, or detailed summaries based on your needs.",
    },
    Feature {
        icon: FeatureIcon::Zap,
        title: "Instant Processing",
        description: "Our AI processes videos quickly, giving you results in seconds.",
    },
    Feature {
        icon: FeatureIcon::BarChart,
        title: "Key Insights",
        description: "Automatically extract the most important points and takeaways.",
    },
    Feature {
        icon: FeatureIcon::Layers,
        title: "Chapter Breakdown",
        description: "Navigate through video content with timestamped chapter summaries.",
    },
    Feature {
        icon: FeatureIcon::Download,
        title: "Export Options",
        description: "Save your summaries as markdown for easy reference later.",
    },
];

/// Heading and copy of the section hosting the input form.
pub const TRY_HEADING: &str = "Try It Now";
/// Copy under the "Try It Now" heading.
pub const TRY_SUBHEADING: &str =
    "Enter a YouTube URL and select your desired level of detail to get started";

/// A titled column of footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [Link],
}

/// Product description under the footer logo.
pub const FOOTER_BLURB: &str = "VideoDigest helps you save time by extracting key insights from \
                                YouTube videos using advanced AI technology.";

/// Social profiles, shown as icons in the footer.
pub const SOCIAL_LINKS: [Link; 3] = [
    Link::new("Twitter", "https://twitter.com"),
    Link::new("Facebook", "https://facebook.com"),
    Link::new("Instagram", "https://instagram.com"),
];

/// Footer link columns: Product, Company and Legal.
pub const FOOTER_GROUPS: [LinkGroup; 3] = [
    LinkGroup {
        title: "Product",
        links: &[
            Link::new("Features", "/#features"),
            Link::new("Pricing", "/pricing"),
            Link::new("Try Now", "/#try-now"),
        ],
    },
    LinkGroup {
        title: "Company",
        links: &[
            Link::new("About Us", "/about"),
            Link::new("Contact", "/contact"),
            Link::new("Careers", "/careers"),
        ],
    },
    LinkGroup {
        title: "Legal",
        links: &[
            Link::new("Terms of Service", "/terms"),
            Link::new("Privacy Policy", "/privacy"),
            Link::new("Cookie Policy", "/cookies"),
        ],
    },
];

/// Footer copyright line for `year`.
pub fn copyright(year: u32) -> String {
    format!("© {year} {BRAND_PREFIX}{BRAND_SUFFIX}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright() {
        assert_eq!(copyright(2025), "© 2025 VideoDigest. All rights reserved.");
    }

    #[test]
    fn test_anchor_links_match_ids() {
        assert_eq!(TRY_NOW.href, format!("/#{TRY_NOW_ANCHOR}"));
        assert_eq!(NAV_LINKS[1].href, format!("/#{FEATURES_ANCHOR}"));
        assert_eq!(hero::SECONDARY.href, format!("#{FEATURES_ANCHOR}"));
    }

    #[test]
    fn test_feature_titles_unique() {
        let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn test_footer_groups() {
        let titles: Vec<_> = FOOTER_GROUPS.iter().map(|g| g.title).collect();
        assert_eq!(titles, ["Product", "Company", "Legal"]);
        assert!(FOOTER_GROUPS.iter().all(|g| g.links.len() == 3));
    }
}
