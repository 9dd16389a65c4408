use crate::helpers::TestContext;
use serde_json::{json, Value};
use test_context::test_context;

async fn create_board(
    app: &crate::helpers::TestApp,
    token: &str,
    category_id: i64,
    title: &str,
    extra: Value,
) -> reqwest::Response {
    let mut body = json!({
        "categoryId": category_id,
        "title": title,
        "content": format!("{title} body"),
    });
    if let (Some(body), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        body.extend(extra.clone());
    }
    app.post("/api/board", &body, Some(token)).await
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_create_board_in_active_category(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let admin = app.signed_in_admin().await;
    let (_, member) = app.signed_in_member().await;
    let category = app.create_category(&admin.access_token, "community").await;

    let response = create_board(app, &member.access_token, category, "Hello", json!({})).await;
    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["boardStatus"], "PUBLISHED");
    assert_eq!(body["boardType"], "COMMUNITY");

    let missing = create_board(app, &member.access_token, 999, "Nope", json!({})).await;
    assert_eq!(missing.status().as_u16(), 404);

    let anonymous = app
        .post(
            "/api/board",
            &json!({ "categoryId": category, "title": "t", "content": "c" }),
            None,
        )
        .await;
    assert_eq!(anonymous.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_hide_unpublished_boards_from_other_members(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let admin = app.signed_in_admin().await;
    let (_, author) = app.signed_in_member().await;
    let (_, stranger) = app.signed_in_member().await;
    let category = app.create_category(&admin.access_token, "drafts").await;

    let created: Value = create_board(
        app,
        &author.access_token,
        category,
        "Work in progress",
        json!({ "boardStatus": "DRAFT" }),
    )
    .await
    .json()
    .await
    .unwrap();
    let path = format!("/api/board/{}", created["boardId"]);

    assert_eq!(app.get(&path, None).await.status().as_u16(), 404);
    assert_eq!(
        app.get(&path, Some(&stranger.access_token))
            .await
            .status()
            .as_u16(),
        404
    );
    assert_eq!(
        app.get(&path, Some(&author.access_token))
            .await
            .status()
            .as_u16(),
        200
    );
    assert_eq!(
        app.get(&path, Some(&admin.access_token))
            .await
            .status()
            .as_u16(),
        200
    );
    assert_eq!(app.get(&path, Some("garbage")).await.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_only_let_the_author_edit(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let admin = app.signed_in_admin().await;
    let (_, author) = app.signed_in_member().await;
    let (_, stranger) = app.signed_in_member().await;
    let category = app.create_category(&admin.access_token, "edits").await;

    let created: Value = create_board(app, &author.access_token, category, "Original", json!({}))
        .await
        .json()
        .await
        .unwrap();
    let path = format!("/api/board/{}", created["boardId"]);
    let update = json!({ "title": "Edited", "content": "new body" });

    let by_stranger = app
        .send_json(reqwest::Method::PUT, &path, &update, Some(&stranger.access_token))
        .await;
    assert_eq!(by_stranger.status().as_u16(), 403);

    let by_author = app
        .send_json(reqwest::Method::PUT, &path, &update, Some(&author.access_token))
        .await;
    assert_eq!(by_author.status().as_u16(), 200);
    let body: Value = by_author.json().await.unwrap();
    assert_eq!(body["title"], "Edited");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_list_and_search_published_boards_newest_first(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let admin = app.signed_in_admin().await;
    let (_, member) = app.signed_in_member().await;
    let category = app.create_category(&admin.access_token, "listing").await;

    for title in ["Lost cat", "Found dog", "Lost parrot"] {
        create_board(app, &member.access_token, category, title, json!({})).await;
    }
    create_board(
        app,
        &member.access_token,
        category,
        "Lost hidden",
        json!({ "boardStatus": "HIDDEN" }),
    )
    .await;
    create_board(
        app,
        &member.access_token,
        category,
        "Lost sighting",
        json!({ "boardType": "SIGHTING" }),
    )
    .await;

    let listed: Value = app
        .get(&format!("/api/board/category/{category}?size=2"), None)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(listed["totalElements"], 3);
    assert_eq!(listed["content"][0]["title"], "Lost parrot");
    assert_eq!(listed["content"][1]["title"], "Found dog");

    let searched: Value = app
        .get("/api/board/search?keyword=lost", None)
        .await
        .json()
        .await
        .unwrap();
    let titles: Vec<&str> = searched["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Lost parrot", "Lost cat"]);

    let sightings: Value = app
        .get("/api/board/search?keyword=lost&type=SIGHTING", None)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(sightings["totalElements"], 1);

    let author_id = listed["content"][0]["memberId"].as_i64().unwrap();
    let by_member: Value = app
        .get(&format!("/api/board/member/{author_id}"), None)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(by_member["totalElements"], 3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_moderate_boards_as_admin(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let admin = app.signed_in_admin().await;
    let (_, member) = app.signed_in_member().await;
    let category = app.create_category(&admin.access_token, "moderation").await;

    let created: Value = create_board(app, &member.access_token, category, "Spam", json!({}))
        .await
        .json()
        .await
        .unwrap();
    create_board(app, &member.access_token, category, "Fine post", json!({})).await;
    let board_id = created["boardId"].as_i64().unwrap();
    let status_path = format!("/api/board/admin/{board_id}/status");

    let by_member = app
        .send_json(
            reqwest::Method::PATCH,
            &status_path,
            &json!({ "status": "HIDDEN" }),
            Some(&member.access_token),
        )
        .await;
    assert_eq!(by_member.status().as_u16(), 403);

    let unknown = app
        .send_json(
            reqwest::Method::PATCH,
            &status_path,
            &json!({ "status": "DELETED" }),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(unknown.status().as_u16(), 400);

    let hidden = app
        .send_json(
            reqwest::Method::PATCH,
            &status_path,
            &json!({ "status": "HIDDEN" }),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(hidden.status().as_u16(), 200);

    let counts: Value = app
        .get("/api/board/admin/counts", Some(&admin.access_token))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(counts, json!({ "total": 2, "published": 1, "hidden": 1, "draft": 0 }));

    let hidden_only: Value = app
        .get("/api/board/admin?status=HIDDEN", Some(&admin.access_token))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(hidden_only["totalElements"], 1);
    assert_eq!(hidden_only["content"][0]["title"], "Spam");

    let all: Value = app
        .get("/api/board/admin", Some(&admin.access_token))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(all["totalElements"], 2);

    let searched: Value = app
        .get(
            &format!("/api/board/admin/search?categoryId={category}&keyword=spam"),
            Some(&admin.access_token),
        )
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(searched["totalElements"], 1);

    let public = app.get(&format!("/api/board/{board_id}"), None).await;
    assert_eq!(public.status().as_u16(), 404);
}
