//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::routes::page::Page;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::enums::EntityKind;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// A group without items is itself a link to `page`.
    page: Option<Page>,
    items: Vec<Page>,
}

/// Pages only administrators see in the menu.
fn admin_only(page: Page) -> bool {
    page == Page::List(EntityKind::User)
}

/// Menu for the signed-in user; admin-only entries are dropped for others.
fn menu_groups_for(is_admin: bool) -> Vec<MenuGroup> {
    get_menu_groups()
        .into_iter()
        .map(|mut group| {
            group.items.retain(|page| is_admin || !admin_only(*page));
            group
        })
        .collect()
}

fn get_menu_groups() -> Vec<MenuGroup> {
    let lists = |kinds: &[EntityKind]| -> Vec<Page> {
        kinds.iter().map(|kind| Page::List(*kind)).collect()
    };
    vec![
        MenuGroup {
            id: "dashboard",
            label: "Dashboard",
            icon: "dashboard",
            page: Some(Page::Dashboard),
            items: vec![],
        },
        MenuGroup {
            id: "calendar",
            label: "Calendar",
            icon: "calendar",
            page: Some(Page::Calendar),
            items: vec![],
        },
        MenuGroup {
            id: "school",
            label: "School",
            icon: "school",
            page: None,
            items: lists(&[
                EntityKind::Customer,
                EntityKind::Appointment,
                EntityKind::Order,
                EntityKind::Instructor,
                EntityKind::Staff,
            ]),
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "catalog",
            page: None,
            items: lists(&[EntityKind::Service, EntityKind::ServicePackage, EntityKind::Product]),
        },
        MenuGroup {
            id: "partners",
            label: "Partners",
            icon: "partners",
            page: None,
            items: lists(&[EntityKind::Hotel, EntityKind::Agency, EntityKind::ThirdParty]),
        },
        MenuGroup {
            id: "finance",
            label: "Finance",
            icon: "finance",
            page: None,
            items: {
                let mut items = lists(&[EntityKind::CompanyAccount, EntityKind::Transaction]);
                items.push(Page::MonthlyReport);
                items
            },
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "settings",
            page: None,
            items: vec![Page::Settings, Page::List(EntityKind::User), Page::Roadmap],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    // Check admin status once, untracked, for filtering menu entries
    let is_admin = auth_state.with_untracked(|state| {
        state.user.as_ref().map(|u| u.is_admin).unwrap_or(false)
    });

    let expanded_groups = RwSignal::new(vec!["school".to_string()]);

    // detail and form pages highlight their entity's list entry
    let active_page = Memo::new(move |_| ctx.page().base());

    let groups = menu_groups_for(is_admin).into_iter();

    view! {
        <div class="app-sidebar__content">
            {groups.map(|group| {
                    let group_id = group.id.to_string();
                    let has_children = !group.items.is_empty();
                    let group_page = group.page;
                    let group_id_for_click = group_id.clone();
                    let group_id_for_exp = group_id.clone();

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    group_page.map(|page| active_page.get() == page).unwrap_or(false)
                                }
                                style:padding-left="12px"
                                on:click=move |_| {
                                    if let Some(page) = group_page {
                                        ctx.navigate(page);
                                    } else {
                                        let gid = group_id_for_click.clone();
                                        expanded_groups.update(move |items| {
                                            if let Some(pos) = items.iter().position(|x| x == &gid) {
                                                items.remove(pos);
                                            } else {
                                                items.push(gid);
                                            }
                                        });
                                    }
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                {has_children.then(|| {
                                    let gid_exp = group_id_for_exp.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__chevron"
                                            class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                        >
                                            {icon("chevron-right")}
                                        </div>
                                    }
                                })}
                            </div>

                            {has_children.then(|| {
                                let gid_show = group_id.clone();
                                let items = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.get().contains(&gid_show)>
                                        <div class="app-sidebar__children">
                                            {items.get_value().into_iter().map(|page| {
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || active_page.get() == page
                                                        style:padding-left="10px"
                                                        on:click=move |_| ctx.navigate(page)
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            <span>{page.title()}</span>
                                                        </div>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </Show>
                                }
                            })}
                        </div>
                    }
                }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_reaches_every_list_page() {
        let groups = get_menu_groups();
        for kind in EntityKind::ALL {
            let page = Page::List(kind);
            assert!(
                groups.iter().any(|group| group.items.contains(&page)),
                "{} missing from menu",
                page
            );
        }
    }

    #[test]
    fn test_only_users_entry_is_admin_gated() {
        let pages = |is_admin| -> Vec<Page> {
            menu_groups_for(is_admin)
                .into_iter()
                .flat_map(|group| group.items)
                .collect()
        };
        let member = pages(false);
        assert!(member.contains(&Page::Settings));
        assert!(member.contains(&Page::Roadmap));
        assert!(member.contains(&Page::List(EntityKind::Customer)));
        assert!(!member.contains(&Page::List(EntityKind::User)));

        let admin = pages(true);
        assert!(admin.contains(&Page::List(EntityKind::User)));
        assert_eq!(admin.len(), member.len() + 1);
    }

    #[test]
    fn test_menu_has_no_detail_or_form_entries() {
        for group in get_menu_groups() {
            for page in group.items.iter().chain(group.page.iter()) {
                assert!(!matches!(page, Page::Detail(_) | Page::Form(_)), "{}", page);
            }
        }
    }
}
