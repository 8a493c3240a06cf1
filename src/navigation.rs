//! This file defines the sidebar and the button that shows and hides it on small screens.

use maud::{Markup, PreEscaped, html};

use crate::{endpoints, html::HeadElement};

const SIDEBAR_STYLE: &str = r#"
    .sidebar {
        display: none;
    }

    .sidebar.active {
        display: block;
    }

    @media (min-width: 1024px) {
        .sidebar {
            display: block;
        }
    }
"#;

const SIDEBAR_TOGGLE_SCRIPT: &str = r#"
    document.addEventListener('DOMContentLoaded', function () {
        const toggle = document.getElementById('sidebar-toggle');
        const sidebar = document.querySelector('.sidebar');

        toggle.addEventListener('click', function () {
            sidebar.classList.toggle('active');
        });
    });
"#;

/// Template for a link in the sidebar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 rounded-lg text-blue-700 bg-blue-50 font-semibold
            dark:bg-blue-900/30 dark:text-blue-200"
        } else {
            "block py-2 px-3 rounded-lg text-gray-900 hover:bg-gray-100
            hover:text-blue-700 dark:text-white dark:hover:bg-gray-700"
        };

        html!( a href=(self.url) class=(style) { (self.title) } )
    }
}

pub struct Sidebar<'a> {
    links: Vec<Link<'a>>,
}

impl Sidebar<'_> {
    /// Get the sidebar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> Sidebar<'_> {
        let links = vec![Link {
            url: endpoints::DASHBOARD_VIEW,
            title: "Dashboard",
            is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
        }];

        Sidebar { links }
    }

    /// The styles and script the sidebar needs in the page head.
    pub fn head_elements() -> [HeadElement; 2] {
        [
            HeadElement::Style(PreEscaped(SIDEBAR_STYLE.to_owned())),
            HeadElement::ScriptSource(PreEscaped(SIDEBAR_TOGGLE_SCRIPT.to_owned())),
        ]
    }

    pub fn into_html(self) -> Markup {
        html!(
            nav class="bg-white border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700"
            {
                div class="flex items-center justify-between mx-auto p-4"
                {
                    span class="text-2xl font-semibold whitespace-nowrap dark:text-white"
                    {
                        "Transfer Dashboard"
                    }

                    button
                        id="sidebar-toggle"
                        type="button"
                        class="p-2 rounded-lg text-gray-500 hover:bg-gray-100
                            dark:text-gray-400 dark:hover:bg-gray-700 lg:hidden"
                        aria-controls="sidebar"
                        aria-label="Toggle sidebar"
                    {
                        "☰"
                    }
                }
            }

            aside
                id="sidebar"
                class="sidebar lg:fixed lg:top-[73px] lg:left-0 lg:w-56 lg:h-full
                    bg-white border-r border-gray-200 dark:bg-gray-800 dark:border-gray-700"
            {
                ul class="p-4 space-y-2"
                {
                    @for link in self.links {
                        li { (link.into_html()) }
                    }

                    li
                    {
                        button
                            type="button"
                            hx-post=(endpoints::RELOAD_DATA)
                            hx-target-error="#alert-container"
                            class="w-full text-left py-2 px-3 rounded-lg text-gray-900
                                hover:bg-gray-100 hover:text-blue-700 dark:text-white
                                dark:hover:bg-gray-700"
                        {
                            "Reload data"
                        }
                    }
                }
            }
        )
    }
}
