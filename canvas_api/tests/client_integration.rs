use canvas_api::endpoints::{
    AddCourseToFavorites, AssignUnassignedMembers, AssignmentAttributes, CourseAttributes,
    CourseEventOutcome, CreateAssignment, DeleteAssignment, DeleteConcludeCourse, EditUser,
    EditUserAttributes, EnrollUser, GetSingleCourse, GradeSubmission, ListAssignmentSubmissions,
    ListAssignments, ListEnrollmentsCourse, ListYourCourses, MarkModuleItemDone,
    MarkSubmissionAsRead, QueryProgress, ResetCourseFavorites, ShowUserDetails,
    ShowUserDetailsQuery, SubmissionPath, UnassignedMembersOutcome, UpdateCourse,
};
use canvas_api::{Client, Error, Violation};
use serde_json::json;
use wiremock::matchers::{any, body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), "token").unwrap()
}

#[tokio::test]
async fn list_courses_success() {
    let mock_server = MockServer::start().await;
    let next = format!("{}/courses?page=2&per_page=2", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(query_param("enrollment_type", "teacher"))
        .and(query_param("include[]", "term"))
        .and(header("authorization", "Bearer token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("courses.json"))
                .insert_header("Link", format!(r#"<{}>; rel="next""#, next).as_str()),
        )
        .mount(&mock_server)
        .await;

    let list = ListYourCourses::default()
        .with_enrollment_type("teacher")
        .with_include("term");
    let page = client(&mock_server).execute(&list).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].course_code.as_deref(), Some("CS241"));
    assert_eq!(
        page.items[0].term.as_ref().map(|t| t.name.as_str()),
        Some("Fall 2024")
    );
    assert_eq!(page.links.next.as_ref().map(|u| u.as_str()), Some(next.as_str()));
}

#[tokio::test]
async fn collect_all_follows_next_links() {
    let mock_server = MockServer::start().await;
    let next = format!("{}/courses?page=2", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(query_param("enrollment_state", "active"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("courses.json"))
                .insert_header("Link", format!(r#"<{}>; rel="next""#, next).as_str()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(query_param("page", "2"))
        .and(header("authorization", "Bearer token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("courses_page2.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let first = client
        .execute(&ListYourCourses::default().with_enrollment_state("active"))
        .await
        .unwrap();
    let all = first.collect_all(&client).await.unwrap();

    let ids: Vec<i64> = all.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![101, 102, 103]);
}

#[tokio::test]
async fn collect_all_stops_when_a_page_links_back_to_the_first() {
    let mock_server = MockServer::start().await;
    let first = format!("{}/courses?enrollment_state=active", mock_server.uri());
    let second = format!("{}/courses?page=2", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(query_param("enrollment_state", "active"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("courses.json"))
                .insert_header("Link", format!(r#"<{}>; rel="next""#, second).as_str()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("courses_page2.json"))
                .insert_header("Link", format!(r#"<{}>; rel="next""#, first).as_str()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let all = client
        .execute(&ListYourCourses::default().with_enrollment_state("active"))
        .await
        .unwrap()
        .collect_all(&client)
        .await
        .unwrap();

    let ids: Vec<i64> = all.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![101, 102, 103]);
}

#[tokio::test]
async fn next_links_to_another_host_are_not_followed() {
    let canvas = MockServer::start().await;
    let elsewhere = MockServer::start().await;
    let foreign = format!("{}/steal?page=2", elsewhere.uri());

    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("courses.json"))
                .insert_header("Link", format!(r#"<{}>; rel="next""#, foreign).as_str()),
        )
        .mount(&canvas)
        .await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&elsewhere)
        .await;

    let client = client(&canvas);
    let page = client.execute(&ListYourCourses::default()).await.unwrap();

    let err = page.next_page(&client).await.unwrap_err();
    assert!(matches!(err, Error::ForeignLink(ref url) if url.as_str() == foreign));
    let err = page.collect_all(&client).await.unwrap_err();
    assert!(matches!(err, Error::ForeignLink(_)));
}

#[tokio::test]
async fn last_page_has_no_next() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("courses_page2.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let page = client.execute(&ListYourCourses::default()).await.unwrap();
    assert!(page.links.next.is_none());
    assert_eq!(
        page.links.current.as_ref().map(|u| u.as_str()),
        Some(format!("{}/courses", mock_server.uri()).as_str())
    );
    assert!(page.next_page(&client).await.unwrap().is_none());
}

#[tokio::test]
async fn path_values_are_percent_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses/sis_course_id%3ACS%20101"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("course.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let course = client(&mock_server)
        .execute(&GetSingleCourse::new("sis_course_id:CS 101"))
        .await
        .unwrap();
    assert_eq!(course.sis_course_id.as_deref(), Some("CS241-F24"));
}

#[tokio::test]
async fn enroll_user_sends_a_form_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/courses/101/enrollments"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("enrollment%5Buser_id%5D=501"))
        .and(body_string_contains("enrollment%5Btype%5D=StudentEnrollment"))
        .and(body_string_contains("enrollment%5Bnotify%5D=true"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("enrollment.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let enroll = EnrollUser::new(101, 501, "StudentEnrollment").with_notify(true);
    let enrollment = client(&mock_server).execute(&enroll).await.unwrap();
    assert_eq!(enrollment.enrollment_type, "StudentEnrollment");
    assert_eq!(enrollment.user.map(|u| u.name), Some("Ada Lovelace".to_string()));
}

#[tokio::test]
async fn invalid_enum_is_rejected_before_sending() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let enroll = EnrollUser::new(101, 501, "PrincipalEnrollment");
    let err = client(&mock_server).execute(&enroll).await.unwrap_err();

    let Error::Validation(errors) = err else {
        panic!("expected a validation error, got {:?}", err);
    };
    assert_eq!(errors.len(), 1);
    let field = &errors.errors()[0];
    assert_eq!(field.field, "enrollment[type]");
    assert!(matches!(
        &field.violation,
        Violation::NotAllowed { value, allowed }
            if value == "PrincipalEnrollment" && allowed.contains(&"StudentEnrollment")
    ));
}

#[tokio::test]
async fn missing_required_field_is_rejected_before_sending() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let create = CreateAssignment::new(101, AssignmentAttributes::default());
    let err = client(&mock_server).execute(&create).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ref e) if e.fields().any(|f| f == "assignment[name]")
    ));
}

#[tokio::test]
async fn edit_user_sends_a_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/501"))
        .and(body_json(json!({"user": {"name": "Ada King", "time_zone": "Europe/London"}})))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("user.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let edit = EditUser::new(
        501,
        EditUserAttributes {
            name: Some("Ada King".to_string()),
            time_zone: Some("Europe/London".to_string()),
            ..EditUserAttributes::default()
        },
    );
    let user = client(&mock_server).execute(&edit).await.unwrap();
    assert_eq!(user.id, 501);
}

#[tokio::test]
async fn grade_submission_sends_nested_groups() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/courses/101/assignments/9001/submissions/502"))
        .and(body_string_contains("submission%5Bposted_grade%5D=8"))
        .and(body_string_contains("comment%5Btext_comment%5D=Nice+work"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("submission.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let grade = GradeSubmission::new(SubmissionPath::new(101, 9001, 502))
        .with_posted_grade("8")
        .with_comment("Nice work");
    let submission = client(&mock_server).execute(&grade).await.unwrap();
    assert_eq!(submission.score, Some(8.0));
}

#[tokio::test]
async fn list_submissions_decodes_comments() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses/101/assignments/9001/submissions"))
        .and(query_param("include[]", "submission_comments"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("submissions.json")))
        .mount(&mock_server)
        .await;

    let list = ListAssignmentSubmissions::new(101, 9001).with_include("submission_comments");
    let page = client(&mock_server).execute(&list).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].submission_comments.len(), 1);
    assert!(page.items[1].submission_comments.is_empty());
}

#[tokio::test]
async fn void_endpoints_accept_an_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/courses/101/assignments/9001/submissions/501/read"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/courses/101/modules/20/items/300/done"))
        .respond_with(ResponseTemplate::new(200).set_body_string("anything"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    client
        .execute(&MarkSubmissionAsRead::new(SubmissionPath::new(101, 9001, 501)))
        .await
        .unwrap();
    client
        .execute(&MarkModuleItemDone::new(101, 20, 300))
        .await
        .unwrap();
}

#[tokio::test]
async fn reset_favorites_reads_a_literal_true() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/self/favorites/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("true\n"))
        .mount(&mock_server)
        .await;

    assert!(client(&mock_server)
        .execute(&ResetCourseFavorites)
        .await
        .unwrap());
}

#[tokio::test]
async fn conclude_course_reads_its_ack() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/courses/101"))
        .and(query_param("event", "conclude"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"conclude": true})))
        .mount(&mock_server)
        .await;

    let outcome = client(&mock_server)
        .execute(&DeleteConcludeCourse::conclude(101))
        .await
        .unwrap();
    assert_eq!(outcome, CourseEventOutcome::Concluded(true));
}

#[tokio::test]
async fn assign_unassigned_members_sync_and_async() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/group_categories/7/assign_unassigned_members"))
        .and(body_string_contains("sync=true"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("memberships.json")))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/group_categories/7/assign_unassigned_members"))
        .and(body_string_contains("sync=false"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("progress.json")))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);

    let outcome = client
        .execute(&AssignUnassignedMembers::new(7).with_sync(true))
        .await
        .unwrap();
    assert!(matches!(outcome, UnassignedMembersOutcome::Memberships(ref m) if m.len() == 2));

    let outcome = client
        .execute(&AssignUnassignedMembers::new(7).with_sync(false))
        .await
        .unwrap();
    let UnassignedMembersOutcome::Progress(progress) = outcome else {
        panic!("expected progress");
    };
    assert!(progress.is_finished());
}

#[tokio::test]
async fn query_progress_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/progress/55"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("progress.json")))
        .mount(&mock_server)
        .await;

    let progress = client(&mock_server)
        .execute(&QueryProgress::new(55))
        .await
        .unwrap();
    assert_eq!(progress.completion, Some(100.0));
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/progress/55"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string(r#"{"errors":[{"message":"An error occurred."}]}"#),
        )
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .execute(&QueryProgress::new(55))
        .await
        .unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("An error occurred."));
        }
        other => panic!("expected an HTTP status error, got {:?}", other),
    }
}

#[tokio::test]
async fn not_found_is_an_http_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"errors":[{"message":"The specified resource does not exist."}]}"#,
        ))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .execute(&GetSingleCourse::new(999))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses/101"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .execute(&GetSingleCourse::new(101))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { ref body, .. } if body == "{not valid json}"));
}

#[tokio::test]
async fn show_user_details_sends_includes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/self"))
        .and(query_param("include[]", "last_login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("user.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let show = ShowUserDetails {
        query: ShowUserDetailsQuery {
            include: vec!["last_login".to_string()],
        },
        ..ShowUserDetails::new("self")
    };
    let user = client(&mock_server).execute(&show).await.unwrap();
    assert_eq!(user.time_zone.as_deref(), Some("Europe/London"));
}

#[tokio::test]
async fn update_course_sends_event_and_course_group() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/courses/101"))
        .and(body_string_contains("course%5Bname%5D=Systems+Programming"))
        .and(body_string_contains("course%5Bdefault_view%5D=modules"))
        .and(body_string_contains("course%5Bevent%5D=offer"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("course.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let update = UpdateCourse::new(
        101,
        CourseAttributes {
            name: Some("Systems Programming".to_string()),
            default_view: Some("modules".to_string()),
            ..CourseAttributes::default()
        },
    )
    .with_event("offer");
    let course = client(&mock_server).execute(&update).await.unwrap();
    assert_eq!(course.default_view.as_deref(), Some("modules"));
}

#[tokio::test]
async fn list_enrollments_filters_by_type_and_state() {
    let mock_server = MockServer::start().await;
    let body = format!("[{}]", load_fixture("enrollment.json"));

    Mock::given(method("GET"))
        .and(path("/courses/101/enrollments"))
        .and(query_param("type[]", "StudentEnrollment"))
        .and(query_param("state[]", "active"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let list = ListEnrollmentsCourse::new(101)
        .with_type("StudentEnrollment")
        .with_state("active");
    let page = client(&mock_server).execute(&list).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].user_id, 501);
}

#[tokio::test]
async fn list_assignments_sends_bucket_and_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses/101/assignments"))
        .and(query_param("bucket", "past"))
        .and(query_param("order_by", "due_at"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("assignments.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let list = ListAssignments::new(101)
        .with_bucket("past")
        .with_order_by("due_at");
    let page = client(&mock_server).execute(&list).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "Lab 1: Pointers");
}

#[tokio::test]
async fn delete_assignment_returns_the_deleted_record() {
    let mock_server = MockServer::start().await;
    let assignments: serde_json::Value =
        serde_json::from_str(&load_fixture("assignments.json")).unwrap();

    Mock::given(method("DELETE"))
        .and(path("/courses/101/assignments/9002"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&assignments[1]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let deleted = client(&mock_server)
        .execute(&DeleteAssignment::new(101, 9002))
        .await
        .unwrap();
    assert_eq!(deleted.id, 9002);
    assert_eq!(deleted.grading_type.as_deref(), Some("pass_fail"));
}

#[tokio::test]
async fn add_course_to_favorites_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/self/favorites/courses/101"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"context_id": 101, "context_type": "course"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let favorite = client(&mock_server)
        .execute(&AddCourseToFavorites::new(101))
        .await
        .unwrap();
    assert_eq!(favorite.context_id, 101);
    assert_eq!(favorite.context_type, "course");
}

#[tokio::test]
async fn reset_favorites_is_false_for_any_other_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/self/favorites/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"message":"ok"}"#))
        .mount(&mock_server)
        .await;

    assert!(!client(&mock_server)
        .execute(&ResetCourseFavorites)
        .await
        .unwrap());
}
