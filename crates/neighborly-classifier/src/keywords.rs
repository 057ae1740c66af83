use neighborly_types::models::Category;

/// Keyword lists in check order. The first category with a matching keyword
/// wins, so reordering this table changes results.
const KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Gardening, &["garden", "plant", "flower", "lawn"]),
    (Category::Cooking, &["cook", "bake", "food", "meal", "recipe"]),
    (Category::Repairs, &["repair", "fix", "plumb", "electrical", "maintenance"]),
    (Category::Education, &["teach", "tutor", "math", "science", "learn"]),
    (Category::Technology, &["computer", "tech", "website", "code", "programming"]),
    (Category::Moving, &["move", "furniture", "box", "lifting"]),
    (Category::PetCare, &["pet", "dog", "cat", "walk"]),
    (Category::Art, &["art", "paint", "draw", "craft"]),
    (Category::Music, &["music", "guitar", "piano", "sing"]),
];

/// Categorize free text by case-insensitive substring search.
pub fn categorize(text: &str) -> Category {
    let text = text.to_lowercase();

    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| text.contains(w)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}
