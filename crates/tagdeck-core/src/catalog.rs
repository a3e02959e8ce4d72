//! Built-in sample catalog.
//!
//! The viewer ships with a fixed, curated playlist. Entries added through the
//! form live only for the current session.

use crate::entry::Entry;

/// `(id, title, tags)` for every curated entry, in display order.
const SAMPLE_VIDEOS: &[(&str, &str, &[&str])] = &[
    ("msdYmNX8KuQ", "wizu - hikikomori", &["힙합", "kpop"]),
    ("ewkSCKdKl2Y", "루시 - 넌 혹시, 난 괜히 You & Me", &["kpop"]),
    (
        "GF_FPaRCUmE",
        "Way Ched · TRADE L - FLIRT (Feat. Leellamarz)",
        &["힙합", "kpop"],
    ),
    ("l6ZBoygz8hU", "Kenshi Yonezu - Décolleté", &["jpop"]),
    ("0unIGP_fhYA", "Kelly is Green - SO BAD", &["pop"]),
    (
        "kwfPxOM415o",
        "Chilli Beans. - rose feat. Vaundy (Official Music Video)",
        &["jpop"],
    ),
    ("i9DHduXUHqI", "keshi - Kiss Me Right", &["jpop"]),
    ("_yGifKCmHC0", "vaultboy - everything sucks", &["jpop"]),
    ("KaP3yDLCZ_w", "wizu - Sub Character", &["kpop", "신남"]),
    ("nI61IxcCiXc", "Penthouse - 一難", &["jpop", "신남"]),
    ("mLuH-vBzGXE", "Peach PRC - Heavy", &["pop"]),
    ("AfxsFsLhL04", "The Chainsmokers - High", &["pop", "힙합", "신남"]),
    (
        "5cZ4EUhei2g",
        "ロクデナシ「言の刃」/ Rokudenashi - Blade of Words",
        &["jpop", "신남"],
    ),
    ("1cnndBdzCAk", "요네즈 켄시 - 1991", &["jpop", "신남"]),
];

/// The curated sample playlist.
#[must_use]
pub fn sample_entries() -> Vec<Entry> {
    SAMPLE_VIDEOS
        .iter()
        .map(|(id, title, tags)| {
            Entry::new(*id, format!("https://www.youtube.com/watch?v={id}"))
                .with_title(*title)
                .with_tags(tags.iter().copied())
        })
        .collect()
}
