//! Diverging color palette for temperature buckets.

/// ColorBrewer RdYlBu 11-class palette, warm to cool.
pub const RD_YL_BU_11: [&str; 11] = [
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090", "#ffffbf", "#e0f3f8", "#abd9e9",
    "#74add1", "#4575b4", "#313695",
];

/// Bucket fill colors ordered cold to hot (RdYlBu reversed), so bucket 0
/// is deep blue and the last bucket deep red.
pub fn bucket_colors() -> Vec<&'static str> {
    let mut colors = RD_YL_BU_11.to_vec();
    colors.reverse();
    colors
}
