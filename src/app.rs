//! Meal Planner Frontend App
//!
//! Session context and route table.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::Layout;
use crate::context::AuthContext;
use crate::pages::{
    CreateRecipePage, EditRecipePage, GroupsPage, LoginPage, PlannerPage, ProfilePage, RecipeDetailPage,
    RecipesPage, RegisterPage, ShoppingListPage,
};

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AuthContext::restore());

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>
                <ParentRoute path=path!("/") view=Layout>
                    <Route path=path!("") view=PlannerPage/>
                    <Route path=path!("recipes") view=RecipesPage/>
                    <Route path=path!("recipes/new") view=CreateRecipePage/>
                    <Route path=path!("recipes/edit/:id") view=EditRecipePage/>
                    <Route path=path!("recipes/:id") view=RecipeDetailPage/>
                    <Route path=path!("shopping-list") view=ShoppingListPage/>
                    <Route path=path!("groups") view=GroupsPage/>
                    <Route path=path!("profile") view=ProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
