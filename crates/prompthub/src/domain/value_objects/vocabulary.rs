//! Advisory platform and category lists
//!
//! Clients pick from these, but the server stores any value.

pub const KNOWN_PLATFORMS: &[&str] = &[
    "ChatGPT",
    "Claude",
    "Gemini",
    "Midjourney",
    "DALL-E 3",
    "Stable Diffusion",
    "기타",
];

pub const KNOWN_CATEGORIES: &[&str] = &[
    "마케팅",
    "개발",
    "아트",
    "사진",
    "콘텐츠",
    "교육",
    "비즈니스",
    "기타",
];

pub fn is_known_platform(platform: &str) -> bool {
    KNOWN_PLATFORMS.contains(&platform)
}

pub fn is_known_category(category: &str) -> bool {
    KNOWN_CATEGORIES.contains(&category)
}
