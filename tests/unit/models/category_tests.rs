// Category classification and presentation

use nearby_places::models::category::Category;
use test_case::test_case;

#[test_case(&["restaurant"] => Category::Restaurant ; "restaurant")]
#[test_case(&["cafe", "restaurant"] => Category::Restaurant ; "restaurant beats cafe")]
#[test_case(&["coffee"] => Category::Cafe ; "coffee counts as cafe")]
#[test_case(&["shopping_mall", "shopping"] => Category::Store ; "shopping counts as store")]
#[test_case(&["museum", "movie_theater"] => Category::MovieTheater ; "cinema beats museum")]
#[test_case(&["tourist_attraction", "museum"] => Category::Museum ; "museum beats attraction")]
#[test_case(&["point_of_interest", "tourist_attraction"] => Category::TouristAttraction ; "attraction")]
#[test_case(&["Cafe "] => Category::Cafe ; "tags are trimmed and case folded")]
#[test_case(&["park", "establishment"] => Category::Other ; "unknown tags")]
#[test_case(&[] => Category::Other ; "no tags")]
fn test_classify(tags: &[&str]) -> Category {
    Category::classify(tags)
}

#[test_case(Category::Restaurant, "Restaurant")]
#[test_case(Category::Cafe, "Café")]
#[test_case(Category::Store, "Shop")]
#[test_case(Category::MovieTheater, "Movie Theater")]
#[test_case(Category::Museum, "Museum")]
#[test_case(Category::TouristAttraction, "Attraction")]
#[test_case(Category::Other, "Place")]
fn test_display_name(category: Category, expected: &str) {
    assert_eq!(category.display_name(), expected);
}

#[test]
fn test_keys_parse_back() {
    for category in Category::ALL {
        assert_eq!(category.key().parse::<Category>().unwrap(), category);
    }
}

#[test]
fn test_colors_are_distinct() {
    let mut colors: Vec<_> = Category::ALL.iter().map(|c| c.color()).collect();
    colors.sort();
    colors.dedup();
    assert_eq!(colors.len(), Category::ALL.len());
}
