use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use super::positive_id;
use crate::error::{Result, ValidationError};
use crate::fields::{Difficulty, IngredientList, PreparationTime, Title};

/// A recipe assembled from already-validated fields.
///
/// Fields are read through accessors and replaced through the `change_*`
/// operations; nothing is settable directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    id: Option<i64>,
    author_id: i64,
    title: Title,
    cuisine_type_id: i64,
    ingredients: IngredientList,
    preparation_time: PreparationTime,
    difficulty: Difficulty,
    active: bool,
    created_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a new, unsaved, active recipe stamped with the current time
    pub fn new(
        author_id: i64,
        title: Title,
        cuisine_type_id: i64,
        ingredients: IngredientList,
        preparation_time: PreparationTime,
        difficulty: Difficulty,
    ) -> Result<Self> {
        Recipe::builder()
            .author_id(author_id)
            .title(title)
            .cuisine_type_id(cuisine_type_id)
            .ingredients(ingredients)
            .preparation_time(preparation_time)
            .difficulty(difficulty)
            .build()
    }

    /// Creates a builder, needed for persisted recipes (id, active flag,
    /// original creation time)
    ///
    /// # Example
    /// ```
    /// use recipe_fields::{Difficulty, IngredientList, PreparationTime, Recipe, Title};
    ///
    /// let recipe = Recipe::builder()
    ///     .id(7)
    ///     .author_id(1)
    ///     .title(Title::new("Tortilla de patatas").unwrap())
    ///     .cuisine_type_id(3)
    ///     .ingredients(IngredientList::new("4 huevos\n3 patatas").unwrap())
    ///     .preparation_time(PreparationTime::new(40).unwrap())
    ///     .difficulty(Difficulty::Medium)
    ///     .active(false)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(recipe.id(), Some(7));
    /// assert!(!recipe.is_active());
    /// ```
    pub fn builder() -> RecipeBuilder {
        RecipeBuilder::default()
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn author_id(&self) -> i64 {
        self.author_id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn cuisine_type_id(&self) -> i64 {
        self.cuisine_type_id
    }

    pub fn ingredients(&self) -> &IngredientList {
        &self.ingredients
    }

    pub fn preparation_time(&self) -> PreparationTime {
        self.preparation_time
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Replace the title. Returns `false` when the new title has the same
    /// content as the current one.
    pub fn change_title(&mut self, title: Title) -> bool {
        if self.title == title {
            debug!("Title unchanged for recipe {:?}", self.id);
            return false;
        }
        self.title = title;
        true
    }

    pub fn change_ingredients(&mut self, ingredients: IngredientList) -> bool {
        if self.ingredients == ingredients {
            debug!("Ingredients unchanged for recipe {:?}", self.id);
            return false;
        }
        self.ingredients = ingredients;
        true
    }

    pub fn change_preparation_time(&mut self, preparation_time: PreparationTime) -> bool {
        if self.preparation_time == preparation_time {
            debug!("Preparation time unchanged for recipe {:?}", self.id);
            return false;
        }
        self.preparation_time = preparation_time;
        true
    }

    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn change_cuisine_type_id(&mut self, cuisine_type_id: i64) -> Result<()> {
        self.cuisine_type_id = positive_id("cuisine_type_id", cuisine_type_id)?;
        Ok(())
    }
}

/// Builder for [`Recipe`]. Required fields are checked in [`RecipeBuilder::build`].
#[derive(Debug, Default)]
pub struct RecipeBuilder {
    id: Option<i64>,
    author_id: Option<i64>,
    title: Option<Title>,
    cuisine_type_id: Option<i64>,
    ingredients: Option<IngredientList>,
    preparation_time: Option<PreparationTime>,
    difficulty: Option<Difficulty>,
    active: Option<bool>,
    created_at: Option<DateTime<Utc>>,
}

impl RecipeBuilder {
    /// Id of a recipe that already exists in storage
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    pub fn cuisine_type_id(mut self, cuisine_type_id: i64) -> Self {
        self.cuisine_type_id = Some(cuisine_type_id);
        self
    }

    pub fn ingredients(mut self, ingredients: IngredientList) -> Self {
        self.ingredients = Some(ingredients);
        self
    }

    pub fn preparation_time(mut self, preparation_time: PreparationTime) -> Self {
        self.preparation_time = Some(preparation_time);
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Defaults to `true`
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Defaults to the time of [`RecipeBuilder::build`]; must not be in the future
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Validate identities and timestamp and assemble the recipe
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidInput` if:
    /// - a required field was never set
    /// - the author, cuisine type or recipe id is not positive
    /// - the creation time is in the future
    pub fn build(self) -> Result<Recipe> {
        let author_id = positive_id("author_id", required("author_id", self.author_id)?)?;
        let cuisine_type_id = positive_id(
            "cuisine_type_id",
            required("cuisine_type_id", self.cuisine_type_id)?,
        )?;
        let id = self.id.map(|id| positive_id("id", id)).transpose()?;

        let now = Utc::now();
        let created_at = match self.created_at {
            Some(created_at) if created_at > now => {
                return Err(ValidationError::invalid(
                    "created_at",
                    "cannot be in the future",
                ));
            }
            Some(created_at) => created_at,
            None => now,
        };

        Ok(Recipe {
            id,
            author_id,
            title: required("title", self.title)?,
            cuisine_type_id,
            ingredients: required("ingredients", self.ingredients)?,
            preparation_time: required("preparation_time", self.preparation_time)?,
            difficulty: required("difficulty", self.difficulty)?,
            active: self.active.unwrap_or(true),
            created_at,
        })
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| ValidationError::invalid(field, "is required"))
}
