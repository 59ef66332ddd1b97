//! 落地页

use crate::auth::use_auth;
use crate::components::icons::{Briefcase, Search, Users};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user_signal();

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
            <div class="text-center mb-16">
                <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">
                    "Find your next opportunity"
                </h1>
                <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                    "Browse openings, apply in one click, and track your applications in one place."
                </p>
                <div class="flex justify-center gap-4 mt-8">
                    <Link to="/jobs" attr:class="btn btn-primary px-6 py-3">
                        "Browse Jobs"
                    </Link>
                    {move || match user.get() {
                        Some(u) => view! {
                            <Link
                                to=AppRoute::dashboard_for(u.role).to_path()
                                attr:class="btn btn-secondary px-6 py-3"
                            >
                                "Go to Dashboard"
                            </Link>
                        }
                            .into_any(),
                        None => view! {
                            <Link to="/register" attr:class="btn btn-secondary px-6 py-3">
                                "Sign Up"
                            </Link>
                        }
                            .into_any(),
                    }}
                </div>
            </div>

            <div class="grid md:grid-cols-3 gap-8">
                <div class="card text-center">
                    <Search attr:class="h-10 w-10 text-primary-600 mx-auto mb-3" />
                    <h3 class="font-semibold text-lg mb-1">"Search Jobs"</h3>
                    <p class="text-gray-600 text-sm">
                        "Filter by title, company or location to find the right fit."
                    </p>
                </div>
                <div class="card text-center">
                    <Briefcase attr:class="h-10 w-10 text-primary-600 mx-auto mb-3" />
                    <h3 class="font-semibold text-lg mb-1">"Apply Instantly"</h3>
                    <p class="text-gray-600 text-sm">
                        "One click sends your application straight to the recruiter."
                    </p>
                </div>
                <div class="card text-center">
                    <Users attr:class="h-10 w-10 text-primary-600 mx-auto mb-3" />
                    <h3 class="font-semibold text-lg mb-1">"Hire Talent"</h3>
                    <p class="text-gray-600 text-sm">
                        "Post openings and review applicants from your dashboard."
                    </p>
                </div>
            </div>
        </div>
    }
}
