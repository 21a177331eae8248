use super::*;
use crate::auth::AuthUser;

fn session(is_admin: bool) -> Session {
    Session {
        user: AuthUser { id: "u1".to_owned(), email: None, display_name: None },
        access_token: "t".to_owned(),
        is_admin,
    }
}

#[test]
fn anonymous_sees_only_sign_in() {
    assert_eq!(nav_items(None), vec![NavItem::SignIn]);
    assert_eq!(NavItem::SignIn.href(), Some("/auth"));
}

#[test]
fn signed_in_user_sees_sign_out_only() {
    assert_eq!(nav_items(Some(&session(false))), vec![NavItem::SignOut]);
}

#[test]
fn admin_sees_admin_link_and_sign_out() {
    assert_eq!(nav_items(Some(&session(true))), vec![NavItem::Admin, NavItem::SignOut]);
    assert_eq!(NavItem::Admin.href(), Some("/admin"));
    assert_eq!(NavItem::SignOut.href(), None);
}
