use chrono::{Duration, Utc};
use recipe_fields::{
    Difficulty, Email, IngredientList, Password, PreparationTime, Recipe, Title, User, Username,
};

fn sample_recipe(author_id: i64) -> Result<Recipe, recipe_fields::ValidationError> {
    Recipe::new(
        author_id,
        Title::new("Croquetas de jamón").unwrap(),
        4,
        IngredientList::new("jamón serrano\nleche\nharina\nmantequilla").unwrap(),
        PreparationTime::from_format("1:15").unwrap(),
        Difficulty::Medium,
    )
}

#[test]
fn test_author_id_must_be_positive() {
    let err = sample_recipe(0).unwrap_err();
    assert_eq!(err.field(), "author_id");
    assert!(sample_recipe(-1).is_err());
    assert!(sample_recipe(1).is_ok());
}

#[test]
fn test_future_creation_time_rejected() {
    let err = Recipe::builder()
        .author_id(1)
        .title(Title::new("Flan").unwrap())
        .cuisine_type_id(1)
        .ingredients(IngredientList::new("huevos\nleche\nazucar").unwrap())
        .preparation_time(PreparationTime::new(50).unwrap())
        .difficulty(Difficulty::Easy)
        .created_at(Utc::now() + Duration::seconds(1))
        .build()
        .unwrap_err();

    assert_eq!(err.field(), "created_at");
    assert_eq!(err.reason(), "cannot be in the future");
}

#[test]
fn test_creation_time_defaults_to_now() {
    let before = Utc::now();
    let recipe = sample_recipe(1).unwrap();
    let after = Utc::now();

    assert!(recipe.created_at() >= before && recipe.created_at() <= after);
    assert!(recipe.is_active());
    assert_eq!(recipe.id(), None);
}

#[test]
fn test_activation_toggles() {
    let mut recipe = sample_recipe(1).unwrap();

    recipe.activate();
    recipe.deactivate();
    assert!(!recipe.is_active());

    recipe.deactivate();
    assert!(!recipe.is_active());

    recipe.activate();
    recipe.activate();
    assert!(recipe.is_active());
}

#[test]
fn test_mutators_compare_by_content() {
    let mut recipe = sample_recipe(1).unwrap();
    let original = recipe.clone();

    assert!(!recipe.change_title(Title::new("  Croquetas   de jamón  ").unwrap()));
    assert!(!recipe.change_ingredients(
        IngredientList::new("jamón serrano\r\nleche\r\n\r\nharina\r\nmantequilla").unwrap()
    ));
    assert!(!recipe.change_preparation_time(PreparationTime::new(75).unwrap()));
    assert_eq!(recipe, original);

    assert!(recipe.change_title(Title::new("Croquetas de pollo").unwrap()));
    assert_ne!(recipe, original);
    assert_eq!(recipe.author_id(), original.author_id());
}

#[test]
fn test_recipe_serializes_fields() {
    let recipe = Recipe::builder()
        .id(10)
        .author_id(2)
        .title(Title::new("Gazpacho").unwrap())
        .cuisine_type_id(5)
        .ingredients(IngredientList::new("tomate\npepino").unwrap())
        .preparation_time(PreparationTime::new(20).unwrap())
        .difficulty(Difficulty::Easy)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .unwrap();

    let json = serde_json::to_value(&recipe).unwrap();
    assert_eq!(json["id"], 10);
    assert_eq!(json["title"], "Gazpacho");
    assert_eq!(json["ingredients"], "tomate\npepino");
    assert_eq!(json["preparation_time"], 20);
    assert_eq!(json["difficulty"], "easy");
    assert_eq!(json["active"], true);
}

#[test]
fn test_user_entity() {
    let user = User::new(
        Username::new("marta").unwrap(),
        Email::new("marta@example.com").unwrap(),
        Password::new("$2y$10$0123456789abcdefghijkl").unwrap(),
        Some(8),
    )
    .unwrap();

    assert_eq!(user.id(), Some(8));
    assert_eq!(user.email().domain(), "example.com");
    assert!(!format!("{:?}", user).contains("$2y$"));

    let err = User::new(
        Username::new("marta").unwrap(),
        Email::new("marta@example.com").unwrap(),
        Password::new("hash").unwrap(),
        Some(-5),
    )
    .unwrap_err();
    assert_eq!(err.field(), "id");
}
