use dioxus::prelude::*;

use crate::client::{
    components::{AdminLayout, Navbar},
    routes::{
        admin::{AdminAnalytics, AdminFixSteps, AdminLogs},
        Home, Login, NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[nest("/admin")]

        #[layout(AdminLayout)]

        #[route("/fix-steps")]
        AdminFixSteps {},

        #[route("/logs")]
        AdminLogs {},

        #[route("/analytics")]
        AdminAnalytics {},

        #[end_layout]

    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
