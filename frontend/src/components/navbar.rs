//! 顶部导航栏
//!
//! 面板入口按角色给出，入口本身仍受路由守卫约束。

use crate::auth::{logout, use_auth};
use crate::components::icons::{Briefcase, LayoutDashboard, LogOut, User};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let user = auth.user_signal();

    let on_logout = move |_| {
        logout(&auth);
        router.navigate("/login");
    };

    view! {
        <nav class="bg-white shadow-md">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <Link to="/" attr:class="flex items-center space-x-2">
                            <Briefcase attr:class="h-8 w-8 text-primary-600" />
                            <span class="text-xl font-bold text-gray-900">"JobBoard"</span>
                        </Link>
                        <div class="hidden md:flex ml-10 space-x-4">
                            <Link
                                to="/jobs"
                                attr:class="text-gray-700 hover:text-primary-600 px-3 py-2 rounded-md text-sm font-medium"
                            >
                                "Jobs"
                            </Link>
                        </div>
                    </div>

                    <div class="flex items-center space-x-4">
                        {move || match user.get() {
                            Some(u) => {
                                let dashboard = AppRoute::dashboard_for(u.role).to_path();
                                let name = u.name.clone();
                                let role = u.role.as_str();
                                view! {
                                    <Link
                                        to=dashboard
                                        attr:class="flex items-center space-x-1 text-gray-700 hover:text-primary-600"
                                    >
                                        <LayoutDashboard attr:class="h-5 w-5" />
                                        <span class="hidden md:inline">"Dashboard"</span>
                                    </Link>
                                    <div class="flex items-center space-x-2 text-gray-700">
                                        <User attr:class="h-5 w-5" />
                                        <span class="hidden md:inline">{name}</span>
                                        <span class="text-xs text-gray-500 hidden md:inline">
                                            "(" {role} ")"
                                        </span>
                                    </div>
                                    <button
                                        on:click=on_logout
                                        class="flex items-center space-x-1 text-gray-700 hover:text-red-600"
                                    >
                                        <LogOut attr:class="h-5 w-5" />
                                        <span class="hidden md:inline">"Logout"</span>
                                    </button>
                                }
                                    .into_any()
                            }
                            None => view! {
                                <Link
                                    to="/login"
                                    attr:class="text-gray-700 hover:text-primary-600 px-3 py-2 rounded-md text-sm font-medium"
                                >
                                    "Login"
                                </Link>
                                <Link to="/register" attr:class="btn btn-primary">
                                    "Sign Up"
                                </Link>
                            }
                                .into_any(),
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}
