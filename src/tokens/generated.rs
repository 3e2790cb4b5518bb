// Generated from the design source export. Do not edit by hand.

use super::DimensionToken;

pub const COLOR_GRAY_100: &str = "#f6f7f9";
pub const COLOR_GRAY_200: &str = "#e9ebef";
pub const COLOR_GRAY_300: &str = "#d5d9e0";
pub const COLOR_GRAY_400: &str = "#b0b7c3";
pub const COLOR_GRAY_500: &str = "#8a93a3";
pub const COLOR_GRAY_600: &str = "#646e80";
pub const COLOR_GRAY_700: &str = "#434c5c";
pub const COLOR_GRAY_800: &str = "#2b323d";
pub const COLOR_GRAY_900: &str = "#1a1f27";
pub const COLOR_BLUE_100: &str = "#e8f1fc";
pub const COLOR_BLUE_200: &str = "#c9dcf7";
pub const COLOR_BLUE_300: &str = "#9cc0ef";
pub const COLOR_BLUE_400: &str = "#5f98e2";
pub const COLOR_BLUE_500: &str = "#2f74cf";
pub const COLOR_BLUE_600: &str = "#1a5fb8";
pub const COLOR_BLUE_700: &str = "#0b4f9e";
pub const COLOR_BLUE_800: &str = "#0a3d7a";
pub const COLOR_BLUE_900: &str = "#082b57";
pub const COLOR_RED_100: &str = "#fdecea";
pub const COLOR_RED_200: &str = "#f9d0cb";
pub const COLOR_RED_300: &str = "#f2a59c";
pub const COLOR_RED_400: &str = "#e8705f";
pub const COLOR_RED_500: &str = "#d94a36";
pub const COLOR_RED_600: &str = "#c23523";
pub const COLOR_RED_700: &str = "#a3261a";
pub const COLOR_RED_800: &str = "#7d1d14";
pub const COLOR_RED_900: &str = "#55140e";
pub const COLOR_GREEN_100: &str = "#e8f6ec";
pub const COLOR_GREEN_200: &str = "#c7e9d1";
pub const COLOR_GREEN_300: &str = "#96d4a8";
pub const COLOR_GREEN_400: &str = "#5cb87a";
pub const COLOR_GREEN_500: &str = "#2f9a55";
pub const COLOR_GREEN_600: &str = "#1f7f42";
pub const COLOR_GREEN_700: &str = "#146c2e";
pub const COLOR_GREEN_800: &str = "#0f5223";
pub const COLOR_GREEN_900: &str = "#0a3818";
pub const COLOR_YELLOW_100: &str = "#fff7e0";
pub const COLOR_YELLOW_200: &str = "#ffebb3";
pub const COLOR_YELLOW_300: &str = "#ffdb7a";
pub const COLOR_YELLOW_400: &str = "#ffc940";
pub const COLOR_YELLOW_500: &str = "#f5b400";
pub const COLOR_YELLOW_600: &str = "#d69a00";
pub const COLOR_YELLOW_700: &str = "#a87800";
pub const COLOR_YELLOW_800: &str = "#7a5700";
pub const COLOR_YELLOW_900: &str = "#4d3700";
pub const COLOR_PURPLE_100: &str = "#f3edfb";
pub const COLOR_PURPLE_200: &str = "#e2d3f6";
pub const COLOR_PURPLE_300: &str = "#c8aef0";
pub const COLOR_PURPLE_400: &str = "#a67fe4";
pub const COLOR_PURPLE_500: &str = "#8656d4";
pub const COLOR_PURPLE_600: &str = "#6e3fbf";
pub const COLOR_PURPLE_700: &str = "#5b2a9e";
pub const COLOR_PURPLE_800: &str = "#451f78";
pub const COLOR_PURPLE_900: &str = "#2f1553";
pub const COLOR_WHITE: &str = "#ffffff";
pub const COLOR_BLACK: &str = "#000000";
pub const COLOR_ALPHA_TRANSPARENT: &str = "rgba(0, 0, 0, 0)";
pub const COLOR_ALPHA_BLACK_5: &str = "rgba(0, 0, 0, 0.05)";
pub const COLOR_ALPHA_BLACK_10: &str = "rgba(0, 0, 0, 0.1)";
pub const COLOR_ALPHA_BLACK_40: &str = "rgba(0, 0, 0, 0.4)";
pub const COLOR_ALPHA_WHITE_20: &str = "rgba(255, 255, 255, 0.2)";

pub const SPACE_NONE: DimensionToken = dimension!(0);
pub const SPACE_3XS: DimensionToken = dimension!(2);
pub const SPACE_2XS: DimensionToken = dimension!(4);
pub const SPACE_XS: DimensionToken = dimension!(6);
pub const SPACE_SM: DimensionToken = dimension!(8);
pub const SPACE_MD: DimensionToken = dimension!(12);
pub const SPACE_LG: DimensionToken = dimension!(16);
pub const SPACE_XL: DimensionToken = dimension!(24);
pub const SPACE_2XL: DimensionToken = dimension!(32);
pub const SPACE_3XL: DimensionToken = dimension!(48);
pub const RADIUS_NONE: DimensionToken = dimension!(0);
pub const RADIUS_SM: DimensionToken = dimension!(4);
pub const RADIUS_MD: DimensionToken = dimension!(8);
pub const RADIUS_LG: DimensionToken = dimension!(12);
pub const RADIUS_PILL: DimensionToken = dimension!(999);
pub const SIZE_CONTROL_SM: DimensionToken = dimension!(32);
pub const SIZE_CONTROL_MD: DimensionToken = dimension!(40);
pub const SIZE_CONTROL_LG: DimensionToken = dimension!(48);
pub const SIZE_PILL_XS: DimensionToken = dimension!(20);
pub const SIZE_PILL_SM: DimensionToken = dimension!(24);
pub const SIZE_PILL_MD: DimensionToken = dimension!(28);
pub const SIZE_PILL_LG: DimensionToken = dimension!(32);
pub const SIZE_ICON_SM: DimensionToken = dimension!(16);
pub const SIZE_ICON_LG: DimensionToken = dimension!(20);
pub const SIZE_TOGGLE_TRACK_WIDTH_SM: DimensionToken = dimension!(32);
pub const SIZE_TOGGLE_TRACK_WIDTH_MD: DimensionToken = dimension!(44);
pub const SIZE_TOGGLE_TRACK_HEIGHT_SM: DimensionToken = dimension!(18);
pub const SIZE_TOGGLE_TRACK_HEIGHT_MD: DimensionToken = dimension!(24);
pub const SIZE_TOGGLE_THUMB_SM: DimensionToken = dimension!(14);
pub const SIZE_TOGGLE_THUMB_MD: DimensionToken = dimension!(20);
pub const SIZE_PILL_TRUNCATE: DimensionToken = dimension!(160);
pub const FONT_SIZE_XS: DimensionToken = dimension!(12);
pub const FONT_SIZE_SM: DimensionToken = dimension!(14);
pub const FONT_SIZE_MD: DimensionToken = dimension!(16);
pub const FONT_SIZE_LG: DimensionToken = dimension!(18);
pub const LINE_HEIGHT_XS: DimensionToken = dimension!(16);
pub const LINE_HEIGHT_SM: DimensionToken = dimension!(20);
pub const LINE_HEIGHT_MD: DimensionToken = dimension!(24);
pub const LINE_HEIGHT_LG: DimensionToken = dimension!(28);
pub const BORDER_WIDTH_NONE: DimensionToken = dimension!(0);
pub const BORDER_WIDTH_THIN: DimensionToken = dimension!(1);
pub const BORDER_WIDTH_THICK: DimensionToken = dimension!(2);
pub const ELEVATION_NONE: DimensionToken = dimension!(0);
pub const ELEVATION_LOW: DimensionToken = dimension!(2);
pub const ELEVATION_HIGH: DimensionToken = dimension!(8);

pub const COLOR_TOKENS: &[(&str, &str)] = &[
    ("color.gray.100", COLOR_GRAY_100),
    ("color.gray.200", COLOR_GRAY_200),
    ("color.gray.300", COLOR_GRAY_300),
    ("color.gray.400", COLOR_GRAY_400),
    ("color.gray.500", COLOR_GRAY_500),
    ("color.gray.600", COLOR_GRAY_600),
    ("color.gray.700", COLOR_GRAY_700),
    ("color.gray.800", COLOR_GRAY_800),
    ("color.gray.900", COLOR_GRAY_900),
    ("color.blue.100", COLOR_BLUE_100),
    ("color.blue.200", COLOR_BLUE_200),
    ("color.blue.300", COLOR_BLUE_300),
    ("color.blue.400", COLOR_BLUE_400),
    ("color.blue.500", COLOR_BLUE_500),
    ("color.blue.600", COLOR_BLUE_600),
    ("color.blue.700", COLOR_BLUE_700),
    ("color.blue.800", COLOR_BLUE_800),
    ("color.blue.900", COLOR_BLUE_900),
    ("color.red.100", COLOR_RED_100),
    ("color.red.200", COLOR_RED_200),
    ("color.red.300", COLOR_RED_300),
    ("color.red.400", COLOR_RED_400),
    ("color.red.500", COLOR_RED_500),
    ("color.red.600", COLOR_RED_600),
    ("color.red.700", COLOR_RED_700),
    ("color.red.800", COLOR_RED_800),
    ("color.red.900", COLOR_RED_900),
    ("color.green.100", COLOR_GREEN_100),
    ("color.green.200", COLOR_GREEN_200),
    ("color.green.300", COLOR_GREEN_300),
    ("color.green.400", COLOR_GREEN_400),
    ("color.green.500", COLOR_GREEN_500),
    ("color.green.600", COLOR_GREEN_600),
    ("color.green.700", COLOR_GREEN_700),
    ("color.green.800", COLOR_GREEN_800),
    ("color.green.900", COLOR_GREEN_900),
    ("color.yellow.100", COLOR_YELLOW_100),
    ("color.yellow.200", COLOR_YELLOW_200),
    ("color.yellow.300", COLOR_YELLOW_300),
    ("color.yellow.400", COLOR_YELLOW_400),
    ("color.yellow.500", COLOR_YELLOW_500),
    ("color.yellow.600", COLOR_YELLOW_600),
    ("color.yellow.700", COLOR_YELLOW_700),
    ("color.yellow.800", COLOR_YELLOW_800),
    ("color.yellow.900", COLOR_YELLOW_900),
    ("color.purple.100", COLOR_PURPLE_100),
    ("color.purple.200", COLOR_PURPLE_200),
    ("color.purple.300", COLOR_PURPLE_300),
    ("color.purple.400", COLOR_PURPLE_400),
    ("color.purple.500", COLOR_PURPLE_500),
    ("color.purple.600", COLOR_PURPLE_600),
    ("color.purple.700", COLOR_PURPLE_700),
    ("color.purple.800", COLOR_PURPLE_800),
    ("color.purple.900", COLOR_PURPLE_900),
    ("color.white", COLOR_WHITE),
    ("color.black", COLOR_BLACK),
    ("color.alpha.transparent", COLOR_ALPHA_TRANSPARENT),
    ("color.alpha.black.5", COLOR_ALPHA_BLACK_5),
    ("color.alpha.black.10", COLOR_ALPHA_BLACK_10),
    ("color.alpha.black.40", COLOR_ALPHA_BLACK_40),
    ("color.alpha.white.20", COLOR_ALPHA_WHITE_20),
];

pub const DIMENSION_TOKENS: &[(&str, DimensionToken)] = &[
    ("space.none", SPACE_NONE),
    ("space.3xs", SPACE_3XS),
    ("space.2xs", SPACE_2XS),
    ("space.xs", SPACE_XS),
    ("space.sm", SPACE_SM),
    ("space.md", SPACE_MD),
    ("space.lg", SPACE_LG),
    ("space.xl", SPACE_XL),
    ("space.2xl", SPACE_2XL),
    ("space.3xl", SPACE_3XL),
    ("radius.none", RADIUS_NONE),
    ("radius.sm", RADIUS_SM),
    ("radius.md", RADIUS_MD),
    ("radius.lg", RADIUS_LG),
    ("radius.pill", RADIUS_PILL),
    ("size.control.sm", SIZE_CONTROL_SM),
    ("size.control.md", SIZE_CONTROL_MD),
    ("size.control.lg", SIZE_CONTROL_LG),
    ("size.pill.xs", SIZE_PILL_XS),
    ("size.pill.sm", SIZE_PILL_SM),
    ("size.pill.md", SIZE_PILL_MD),
    ("size.pill.lg", SIZE_PILL_LG),
    ("size.icon.sm", SIZE_ICON_SM),
    ("size.icon.lg", SIZE_ICON_LG),
    ("size.toggle.track.width.sm", SIZE_TOGGLE_TRACK_WIDTH_SM),
    ("size.toggle.track.width.md", SIZE_TOGGLE_TRACK_WIDTH_MD),
    ("size.toggle.track.height.sm", SIZE_TOGGLE_TRACK_HEIGHT_SM),
    ("size.toggle.track.height.md", SIZE_TOGGLE_TRACK_HEIGHT_MD),
    ("size.toggle.thumb.sm", SIZE_TOGGLE_THUMB_SM),
    ("size.toggle.thumb.md", SIZE_TOGGLE_THUMB_MD),
    ("size.pill.truncate", SIZE_PILL_TRUNCATE),
    ("font.size.xs", FONT_SIZE_XS),
    ("font.size.sm", FONT_SIZE_SM),
    ("font.size.md", FONT_SIZE_MD),
    ("font.size.lg", FONT_SIZE_LG),
    ("line.height.xs", LINE_HEIGHT_XS),
    ("line.height.sm", LINE_HEIGHT_SM),
    ("line.height.md", LINE_HEIGHT_MD),
    ("line.height.lg", LINE_HEIGHT_LG),
    ("border.width.none", BORDER_WIDTH_NONE),
    ("border.width.thin", BORDER_WIDTH_THIN),
    ("border.width.thick", BORDER_WIDTH_THICK),
    ("elevation.none", ELEVATION_NONE),
    ("elevation.low", ELEVATION_LOW),
    ("elevation.high", ELEVATION_HIGH),
];
