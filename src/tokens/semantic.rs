// Generated from the design source export. Do not edit by hand.

pub const SEMANTIC_TOKENS: &[(&str, &str)] = &[
    ("color.bg.neutral.subtle", "color.gray.100"),
    ("color.bg.neutral.subtle-hover", "color.gray.200"),
    ("color.bg.neutral.strong", "color.gray.800"),
    ("color.bg.neutral.strong-hover", "color.gray.900"),
    ("color.text.neutral.subtle", "color.gray.900"),
    ("color.text.neutral.strong", "color.white"),
    ("color.border.neutral", "color.gray.300"),
    ("color.bg.brand.subtle", "color.blue.100"),
    ("color.bg.brand.subtle-hover", "color.blue.200"),
    ("color.bg.brand.strong", "color.blue.700"),
    ("color.bg.brand.strong-hover", "color.blue.800"),
    ("color.text.brand.subtle", "color.blue.800"),
    ("color.text.brand.strong", "color.white"),
    ("color.border.brand", "color.blue.600"),
    ("color.bg.info.subtle", "color.blue.100"),
    ("color.bg.info.subtle-hover", "color.blue.200"),
    ("color.bg.info.strong", "color.blue.700"),
    ("color.bg.info.strong-hover", "color.blue.800"),
    ("color.text.info.subtle", "color.blue.900"),
    ("color.text.info.strong", "color.white"),
    ("color.border.info", "color.blue.300"),
    ("color.bg.positive.subtle", "color.green.100"),
    ("color.bg.positive.subtle-hover", "color.green.200"),
    ("color.bg.positive.strong", "color.green.700"),
    ("color.bg.positive.strong-hover", "color.green.800"),
    ("color.text.positive.subtle", "color.green.800"),
    ("color.text.positive.strong", "color.white"),
    ("color.border.positive", "color.green.300"),
    ("color.bg.warning.subtle", "color.yellow.100"),
    ("color.bg.warning.subtle-hover", "color.yellow.200"),
    ("color.bg.warning.strong", "color.yellow.500"),
    ("color.bg.warning.strong-hover", "color.yellow.400"),
    ("color.text.warning.subtle", "color.yellow.900"),
    ("color.text.warning.strong", "color.gray.900"),
    ("color.border.warning", "color.yellow.300"),
    ("color.bg.alert.subtle", "color.red.100"),
    ("color.bg.alert.subtle-hover", "color.red.200"),
    ("color.bg.alert.strong", "color.red.700"),
    ("color.bg.alert.strong-hover", "color.red.800"),
    ("color.text.alert.subtle", "color.red.800"),
    ("color.text.alert.strong", "color.white"),
    ("color.border.alert", "color.red.300"),
    ("color.bg.surface", "color.white"),
    ("color.bg.surface-hover", "color.gray.100"),
    ("color.bg.transparent", "color.alpha.transparent"),
    ("color.bg.transparent-hover", "color.alpha.black.5"),
    ("color.text.primary", "color.gray.900"),
    ("color.text.secondary", "color.gray.600"),
    ("color.text.disabled", "color.gray.400"),
    ("color.border.default", "color.gray.300"),
    ("color.border.strong", "color.gray.500"),
    ("color.border.focus", "color.blue.600"),
    ("color.toggle.track.off", "color.gray.400"),
    ("color.toggle.track.on", "color.blue.600"),
    ("color.toggle.thumb", "color.white"),
    ("color.shadow", "color.alpha.black.10"),
];

pub const CONTRAST_CATEGORIES: &[&str] = &["neutral", "brand", "info", "positive", "warning", "alert"];
