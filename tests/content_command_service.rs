// tests/content_command_service.rs
use lexpress_core::application::{
    commands::{
        content::{CreateContentCommand, DeleteContentCommand, UpdateContentCommand},
        engagement::{AddCommentCommand, ToggleLikeCommand},
    },
    error::ApplicationError,
};
use lexpress_core::domain::content::Category;

mod support;

use support::mocks::identity::{admin_viewer, reader_viewer, viewer};
use support::{ArticleSeed, InMemoryStore};

fn create(title: &str, category: &str, body: &str) -> CreateContentCommand {
    CreateContentCommand {
        title: title.into(),
        category: category.into(),
        body: body.into(),
        cover_image: None,
    }
}

#[tokio::test]
async fn admin_publishes_and_account_is_created_lazily() {
    let store = InMemoryStore::new();
    let services = support::build_services(&store);
    let admin = admin_viewer();

    let created = services
        .content_commands
        .create_content(
            Some(&admin),
            CreateContentCommand {
                cover_image: Some("https://cdn.example.com/scales.png".into()),
                ..create("  Mediation in family disputes ", "family", "<p>Long enough body.</p>")
            },
        )
        .await
        .unwrap();

    assert_eq!(created.title, "Mediation in family disputes");
    assert_eq!(created.category, "Family");
    assert_eq!(created.author.name, "Asha Rao");
    assert_eq!(created.created_at, support::fixed_now());
    assert!(store.user_by_external_id("user_admin").is_some());
    assert_eq!(store.article_count(), 1);
}

#[tokio::test]
async fn submissions_are_validated() {
    let store = InMemoryStore::new();
    let services = support::build_services(&store);
    let admin = admin_viewer();

    let cases = [
        create("ab", "Civil", "<p>Long enough body.</p>"),
        create(&"x".repeat(101), "Civil", "<p>Long enough body.</p>"),
        create("Valid title", "Maritime", "<p>Long enough body.</p>"),
        create("Valid title", "Civil", "short"),
        CreateContentCommand {
            cover_image: Some("ftp://files.example.com/a.png".into()),
            ..create("Valid title", "Civil", "<p>Long enough body.</p>")
        },
    ];

    for command in cases {
        let err = services
            .content_commands
            .create_content(Some(&admin), command)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)), "{err:?}");
    }
    assert_eq!(store.article_count(), 0);
}

#[tokio::test]
async fn dashboard_requires_admin_role() {
    let store = InMemoryStore::new();
    let services = support::build_services(&store);

    let err = services
        .content_commands
        .create_content(None, create("Valid title", "Civil", "<p>Long enough body.</p>"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));

    let reader = reader_viewer();
    let err = services
        .content_commands
        .create_content(Some(&reader), create("Valid title", "Civil", "<p>Long enough body.</p>"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let moderator = viewer(
        "user_mod",
        "Ravi Das",
        Some(lexpress_core::domain::user::Role::Moderator),
    );
    let err = services
        .dashboard_queries
        .overview(Some(&moderator))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn only_the_author_may_update_or_delete() {
    let store = InMemoryStore::new();
    let other = store.seed_user("user_admin2", "Vikram Sen");
    let id = store.seed_article(other, ArticleSeed::new("Someone else's piece"));
    let services = support::build_services(&store);
    let admin = admin_viewer();

    let err = services
        .content_commands
        .update_content(
            Some(&admin),
            UpdateContentCommand {
                id: id.0,
                title: Some("Hijacked title".into()),
                category: None,
                body: None,
                cover_image: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = services
        .content_commands
        .delete_content(Some(&admin), DeleteContentCommand { id: id.0 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert_eq!(store.article_count(), 1);

    let err = services
        .content_commands
        .delete_content(Some(&admin), DeleteContentCommand { id: 999 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn partial_update_changes_only_given_fields() {
    let store = InMemoryStore::new();
    let author = store.seed_user("user_admin", "Asha Rao");
    let id = store.seed_article(
        author,
        ArticleSeed::new("Original title").category(Category::Civil),
    );
    let services = support::build_services(&store);
    let admin = admin_viewer();

    let updated = services
        .content_commands
        .update_content(
            Some(&admin),
            UpdateContentCommand {
                id: id.0,
                title: None,
                category: Some("Property".into()),
                body: None,
                cover_image: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Original title");
    assert_eq!(updated.category, "Property");

    let err = services
        .content_commands
        .update_content(
            Some(&admin),
            UpdateContentCommand {
                id: id.0,
                title: None,
                category: None,
                body: None,
                cover_image: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn blank_cover_on_update_keeps_existing_cover() {
    let store = InMemoryStore::new();
    let author = store.seed_user("user_admin", "Asha Rao");
    let id = store.seed_article(
        author,
        ArticleSeed::new("Tenancy deposits").cover_image("https://cdn.example.com/keys.png"),
    );
    let services = support::build_services(&store);
    let admin = admin_viewer();

    let updated = services
        .content_commands
        .update_content(
            Some(&admin),
            UpdateContentCommand {
                id: id.0,
                title: Some("Tenancy deposits explained".into()),
                category: None,
                body: None,
                cover_image: Some("   ".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Tenancy deposits explained");
    assert_eq!(
        updated.cover_image.as_deref(),
        Some("https://cdn.example.com/keys.png")
    );

    // a blank cover alone is not a change
    let err = services
        .content_commands
        .update_content(
            Some(&admin),
            UpdateContentCommand {
                id: id.0,
                title: None,
                category: None,
                body: None,
                cover_image: Some(String::new()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn delete_cascades_to_comments_and_likes() {
    let store = InMemoryStore::new();
    let author = store.seed_user("user_admin", "Asha Rao");
    let reader = store.seed_user("user_reader", "Meera Iyer");
    let id = store.seed_article(author, ArticleSeed::new("Doomed piece"));
    store.seed_comment(id, reader, "Nice");
    store.seed_like(id, reader);
    let services = support::build_services(&store);

    services
        .content_commands
        .delete_content(Some(&admin_viewer()), DeleteContentCommand { id: id.0 })
        .await
        .unwrap();

    assert!(store.article(id).is_none());
    assert_eq!(store.comment_count(), 0);
    assert_eq!(store.like_count(), 0);
}

#[tokio::test]
async fn like_toggles_on_and_off() {
    let store = InMemoryStore::new();
    let author = store.seed_user("user_admin", "Asha Rao");
    let id = store.seed_article(author, ArticleSeed::new("Likeable"));
    let services = support::build_services(&store);
    let reader = reader_viewer();

    let first = services
        .engagement_commands
        .toggle_like(Some(&reader), ToggleLikeCommand { content_id: id.0 })
        .await
        .unwrap();
    assert!(first.liked);
    assert_eq!(first.likes, 1);

    let second = services
        .engagement_commands
        .toggle_like(Some(&reader), ToggleLikeCommand { content_id: id.0 })
        .await
        .unwrap();
    assert!(!second.liked);
    assert_eq!(second.likes, 0);

    let err = services
        .engagement_commands
        .toggle_like(None, ToggleLikeCommand { content_id: id.0 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn comments_need_a_viewer_an_article_and_text() {
    let store = InMemoryStore::new();
    let author = store.seed_user("user_admin", "Asha Rao");
    let id = store.seed_article(author, ArticleSeed::new("Discussable"));
    let services = support::build_services(&store);
    let reader = reader_viewer();

    let err = services
        .engagement_commands
        .add_comment(
            None,
            AddCommentCommand {
                content_id: id.0,
                body: "hello".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));

    let err = services
        .engagement_commands
        .add_comment(
            Some(&reader),
            AddCommentCommand {
                content_id: 404,
                body: "hello".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = services
        .engagement_commands
        .add_comment(
            Some(&reader),
            AddCommentCommand {
                content_id: id.0,
                body: "   ".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let comment = services
        .engagement_commands
        .add_comment(
            Some(&reader),
            AddCommentCommand {
                content_id: id.0,
                body: "  Well argued.  ".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(comment.body, "Well argued.");
    assert_eq!(comment.author.name, "Meera Iyer");
    assert_eq!(store.comment_count(), 1);
}

#[tokio::test]
async fn dashboard_totals_sum_engagement() {
    let store = InMemoryStore::new();
    let author = store.seed_user("user_admin", "Asha Rao");
    let reader = store.seed_user("user_reader", "Meera Iyer");
    let other = store.seed_user("user_admin2", "Vikram Sen");
    let first = store.seed_article(author, ArticleSeed::new("First").minutes_ago(30));
    let second = store.seed_article(author, ArticleSeed::new("Second").minutes_ago(10));
    store.seed_article(other, ArticleSeed::new("Not mine"));
    store.seed_like(first, reader);
    store.seed_like(second, reader);
    store.seed_like(second, other);
    store.seed_comment(first, reader, "Good");

    let services = support::build_services(&store);
    let dashboard = services
        .dashboard_queries
        .overview(Some(&admin_viewer()))
        .await
        .unwrap();

    assert_eq!(dashboard.total_articles, 2);
    assert_eq!(dashboard.total_likes, 3);
    assert_eq!(dashboard.total_comments, 1);
    assert_eq!(dashboard.articles[0].id, second.0);
}
