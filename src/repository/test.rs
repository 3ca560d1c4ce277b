use std::sync::Mutex;

use crate::domain::category::{Category, NewCategory};
use crate::domain::movie::{Movie, NewMovie};
use crate::domain::types::{CategoryId, MovieId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CategoryReader, CategoryWriter, MovieListQuery, MovieReader, MovieWriter,
};

#[derive(Default)]
struct State {
    categories: Vec<Category>,
    movies: Vec<Movie>,
    next_category_id: i32,
    next_movie_id: i32,
    lose_writes: bool,
}

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    state: Mutex<State>,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>, movies: Vec<Movie>) -> Self {
        let next_category_id = categories.iter().map(|c| c.id.get()).max().unwrap_or(0);
        let next_movie_id = movies.iter().map(|m| m.id.get()).max().unwrap_or(0);
        Self {
            state: Mutex::new(State {
                categories,
                movies,
                next_category_id,
                next_movie_id,
                lose_writes: false,
            }),
        }
    }

    /// Make updates and deletes report zero affected rows without touching
    /// state, as if another request removed the row first.
    pub fn with_lost_writes(self) -> Self {
        self.state.lock().unwrap().lose_writes = true;
        self
    }

    pub fn movie_count(&self) -> usize {
        self.state.lock().unwrap().movies.len()
    }

    pub fn category_count(&self) -> usize {
        self.state.lock().unwrap().categories.len()
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.state.lock().unwrap().categories.clone())
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }
}

impl CategoryWriter for TestRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        let mut state = self.state.lock().unwrap();
        state.next_category_id += 1;
        let created = Category {
            id: CategoryId::new(state.next_category_id)?,
            name: category.name.clone(),
            description: category.description.clone(),
        };
        state.categories.push(created.clone());
        Ok(created)
    }

    fn update_category(&self, id: CategoryId, category: &NewCategory) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        if state.lose_writes {
            return Ok(0);
        }
        let mut affected = 0;
        for existing in state.categories.iter_mut().filter(|c| c.id == id) {
            existing.name = category.name.clone();
            existing.description = category.description.clone();
            affected += 1;
        }
        Ok(affected)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        if state.lose_writes {
            return Ok(0);
        }
        state.movies.retain(|m| m.category_id != id);
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        Ok(before - state.categories.len())
    }
}

impl MovieReader for TestRepository {
    fn list_movies(&self, query: MovieListQuery) -> RepositoryResult<Vec<Movie>> {
        let mut items = self.state.lock().unwrap().movies.clone();
        if let Some(category_id) = query.category_id {
            items.retain(|m| m.category_id == category_id);
        }
        Ok(items)
    }

    fn get_movie_by_id(&self, id: MovieId) -> RepositoryResult<Option<Movie>> {
        let state = self.state.lock().unwrap();
        Ok(state.movies.iter().find(|m| m.id == id).cloned())
    }
}

impl MovieWriter for TestRepository {
    fn create_movie(&self, movie: &NewMovie) -> RepositoryResult<Movie> {
        let mut state = self.state.lock().unwrap();
        state.next_movie_id += 1;
        let created = Movie {
            id: MovieId::new(state.next_movie_id)?,
            title: movie.title.clone(),
            description: movie.description.clone(),
            price: movie.price,
            category_id: movie.category_id,
            status: movie.status.clone(),
        };
        state.movies.push(created.clone());
        Ok(created)
    }

    fn update_movie(&self, id: MovieId, movie: &NewMovie) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        if state.lose_writes {
            return Ok(0);
        }
        let mut affected = 0;
        for existing in state.movies.iter_mut().filter(|m| m.id == id) {
            existing.title = movie.title.clone();
            existing.description = movie.description.clone();
            existing.price = movie.price;
            existing.category_id = movie.category_id;
            existing.status = movie.status.clone();
            affected += 1;
        }
        Ok(affected)
    }

    fn delete_movie(&self, id: MovieId) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        if state.lose_writes {
            return Ok(0);
        }
        let before = state.movies.len();
        state.movies.retain(|m| m.id != id);
        Ok(before - state.movies.len())
    }
}
