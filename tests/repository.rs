use chrono::Utc;
use diesel::prelude::*;

use academia::domain::course::NewCourse;
use academia::domain::activity::NewUserActivity;
use academia::domain::types::{
    ActivityType, CoursePrice, CourseSlug, CourseStatus, CourseTitle, EmailAddress,
    SubcategoryId, UserId, UserRole,
};
use academia::domain::user::NewUser;
use academia::repository::{
    ActivityReader, ActivityWriter, CategoryReader, CourseListQuery, CourseReader, CourseWriter,
    DieselRepository, UserReader, UserWriter,
};
use academia::schema::{categories, subcategories};

mod common;

fn new_user(email: &str, auth_id: Option<&str>, role: UserRole) -> NewUser {
    let now = Utc::now().naive_utc();
    NewUser {
        email: EmailAddress::new(email).expect("valid email"),
        name: None,
        avatar: None,
        role,
        auth_id: auth_id.map(|a| a.try_into().expect("valid auth id")),
        email_verified: None,
        created_at: now,
        updated_at: now,
    }
}

fn new_course(
    title: &str,
    slug: &str,
    status: CourseStatus,
    price: f64,
    instructor_id: UserId,
) -> NewCourse {
    let now = Utc::now().naive_utc();
    NewCourse {
        title: CourseTitle::new(title).expect("valid title"),
        slug: CourseSlug::new(slug).expect("valid slug"),
        description: Some("Una descripción del curso".to_string()),
        short_desc: Some("Resumen".to_string()),
        thumbnail: None,
        price: CoursePrice::new(price).expect("valid price"),
        status,
        featured: false,
        level: None,
        published_at: (status == CourseStatus::Published).then_some(now),
        instructor_id,
        category_id: None,
        subcategory_id: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn creates_and_reads_back_courses() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let instructor = repo
        .create_user(&new_user("prof@example.com", Some("auth-1"), UserRole::Teacher))
        .expect("should create instructor");

    let created = repo
        .create_course(&new_course(
            "Curso de Rust",
            "curso-de-rust",
            CourseStatus::Draft,
            19.99,
            instructor.id,
        ))
        .expect("should create course");
    assert_eq!(created.title.as_str(), "Curso de Rust");
    assert_eq!(created.status, CourseStatus::Draft);

    let fetched = repo
        .get_course_by_slug("curso-de-rust")
        .expect("lookup should succeed")
        .expect("course should exist");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.price.get(), 19.99);

    assert!(repo.slug_exists("curso-de-rust").unwrap());
    assert!(!repo.slug_exists("curso-de-rust-1").unwrap());
}

#[test]
fn duplicate_slugs_are_rejected_by_the_store() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let instructor = repo
        .create_user(&new_user("prof@example.com", None, UserRole::Teacher))
        .expect("should create instructor");

    let course = new_course(
        "Curso de Rust",
        "curso-de-rust",
        CourseStatus::Draft,
        0.0,
        instructor.id,
    );
    repo.create_course(&course).expect("first insert succeeds");
    assert!(repo.create_course(&course).is_err());
}

#[test]
fn list_courses_filters_by_status_and_price() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let instructor = repo
        .create_user(&new_user("prof@example.com", None, UserRole::Teacher))
        .expect("should create instructor");

    for (i, (status, price)) in [
        (CourseStatus::Published, 10.0),
        (CourseStatus::Published, 20.0),
        (CourseStatus::Published, 30.0),
        (CourseStatus::Draft, 20.0),
    ]
    .into_iter()
    .enumerate()
    {
        repo.create_course(&new_course(
            &format!("Curso {i}"),
            &format!("curso-{i}"),
            status,
            price,
            instructor.id,
        ))
        .expect("should create course");
    }

    let query = CourseListQuery::default()
        .status(CourseStatus::Published)
        .price_min(15.0)
        .price_max(25.0);
    let (total, courses) = repo.list_courses(query).expect("should list courses");

    assert_eq!(total, 1);
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].slug.as_str(), "curso-1");
}

#[test]
fn list_courses_total_is_stable_across_pages() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let instructor = repo
        .create_user(&new_user("prof@example.com", None, UserRole::Teacher))
        .expect("should create instructor");

    for i in 0..7 {
        repo.create_course(&new_course(
            &format!("Curso {i}"),
            &format!("curso-{i}"),
            CourseStatus::Published,
            10.0,
            instructor.id,
        ))
        .expect("should create course");
    }

    let page_one = CourseListQuery::default()
        .status(CourseStatus::Published)
        .paginate(1, 3);
    let page_three = CourseListQuery::default()
        .status(CourseStatus::Published)
        .paginate(3, 3);

    let (total_one, first) = repo.list_courses(page_one).expect("page 1");
    let (total_three, last) = repo.list_courses(page_three).expect("page 3");

    assert_eq!(total_one, 7);
    assert_eq!(total_three, 7);
    assert_eq!(first.len(), 3);
    assert_eq!(last.len(), 1);
}

#[test]
fn list_courses_tolerates_huge_page_numbers() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let instructor = repo
        .create_user(&new_user("prof@example.com", None, UserRole::Teacher))
        .expect("should create instructor");
    repo.create_course(&new_course(
        "Curso de Rust",
        "curso-de-rust",
        CourseStatus::Published,
        0.0,
        instructor.id,
    ))
    .expect("should create course");

    let (total, rows) = repo
        .list_courses(CourseListQuery::default().paginate(usize::MAX, 12))
        .expect("should list");
    assert_eq!(total, 1);
    assert!(rows.is_empty());

    let (total, rows) = repo
        .list_courses(CourseListQuery::default().paginate(1, usize::MAX))
        .expect("should list");
    assert_eq!(total, 1);
    assert_eq!(rows.len(), 1);
}

#[test]
fn search_matches_title_and_descriptions_case_insensitively() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let instructor = repo
        .create_user(&new_user("prof@example.com", None, UserRole::Teacher))
        .expect("should create instructor");

    repo.create_course(&new_course(
        "Curso de RUST",
        "curso-de-rust",
        CourseStatus::Published,
        0.0,
        instructor.id,
    ))
    .expect("should create course");
    repo.create_course(&new_course(
        "Diseño UX",
        "diseno-ux",
        CourseStatus::Published,
        0.0,
        instructor.id,
    ))
    .expect("should create course");

    let (total, courses) = repo
        .list_courses(CourseListQuery::default().search("rust"))
        .expect("should search");
    assert_eq!(total, 1);
    assert_eq!(courses[0].slug.as_str(), "curso-de-rust");
}

#[test]
fn publishing_updates_status_and_timestamp() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let instructor = repo
        .create_user(&new_user("prof@example.com", None, UserRole::Teacher))
        .expect("should create instructor");
    let course = repo
        .create_course(&new_course(
            "Curso de Rust",
            "curso-de-rust",
            CourseStatus::Draft,
            0.0,
            instructor.id,
        ))
        .expect("should create course");
    assert!(course.published_at.is_none());

    let now = Utc::now().naive_utc();
    let affected = repo
        .set_course_status(course.id, CourseStatus::Published, Some(now))
        .expect("should publish");
    assert_eq!(affected, 1);

    let published = repo
        .get_course_by_id(course.id)
        .expect("lookup should succeed")
        .expect("course should exist");
    assert_eq!(published.status, CourseStatus::Published);
    assert_eq!(published.published_at, Some(published.updated_at));
}

#[test]
fn counts_published_courses_per_subcategory() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut conn = test_db.pool().get().expect("should acquire connection");
    diesel::insert_into(categories::table)
        .values((
            categories::name.eq("Programación"),
            categories::slug.eq("programacion"),
        ))
        .execute(&mut conn)
        .expect("should create category");
    diesel::insert_into(subcategories::table)
        .values((
            subcategories::category_id.eq(1),
            subcategories::name.eq("Web"),
            subcategories::slug.eq("web"),
        ))
        .execute(&mut conn)
        .expect("should create subcategory");

    let instructor = repo
        .create_user(&new_user("prof@example.com", None, UserRole::Teacher))
        .expect("should create instructor");

    let subcategory_id = SubcategoryId::new(1).expect("valid id");
    for (i, status) in [
        CourseStatus::Published,
        CourseStatus::Published,
        CourseStatus::Draft,
    ]
    .into_iter()
    .enumerate()
    {
        let mut course = new_course(
            &format!("Curso {i}"),
            &format!("curso-{i}"),
            status,
            0.0,
            instructor.id,
        );
        course.subcategory_id = Some(subcategory_id);
        repo.create_course(&course).expect("should create course");
    }

    let count = repo
        .count_published_by_subcategory(subcategory_id)
        .expect("should count");
    assert_eq!(count, 2);

    let subcategory = repo
        .get_subcategory_by_id(subcategory_id)
        .expect("lookup should succeed")
        .expect("subcategory should exist");
    assert_eq!(subcategory.name.as_str(), "Web");
}

#[test]
fn activity_log_appends_and_reads_back() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let user = repo
        .create_user(&new_user("prof@example.com", Some("auth-1"), UserRole::Teacher))
        .expect("should create user");

    repo.log_activity(&NewUserActivity {
        user_id: user.id,
        activity_type: ActivityType::CourseCreated,
        description: "Creó el curso: Curso de Rust".to_string(),
        metadata: Some(r#"{"courseId":1}"#.to_string()),
        created_at: Utc::now().naive_utc(),
    })
    .expect("should log activity");

    let activities = repo.list_activities(user.id).expect("should list");
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].activity_type, ActivityType::CourseCreated);
    assert_eq!(activities[0].metadata.as_deref(), Some(r#"{"courseId":1}"#));
}

#[test]
fn links_auth_id_to_preprovisioned_profile() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let professor = repo
        .create_user(&new_user("ana@example.com", None, UserRole::Teacher))
        .expect("should create user");
    assert!(professor.auth_id.is_none());

    let affected = repo
        .set_auth_id(professor.id, "auth-1")
        .expect("should link");
    assert_eq!(affected, 1);

    let linked = repo
        .get_user_by_auth_id("auth-1")
        .expect("lookup should succeed")
        .expect("user should exist");
    assert_eq!(linked.id, professor.id);
}

#[test]
fn marks_email_verified_by_auth_id() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_user(&new_user("ana@example.com", Some("auth-1"), UserRole::Student))
        .expect("should create user");

    let affected = repo
        .set_email_verified("auth-1", Utc::now().naive_utc())
        .expect("should update");
    assert_eq!(affected, 1);

    let user = repo
        .get_user_by_auth_id("auth-1")
        .expect("lookup should succeed")
        .expect("user should exist");
    assert!(user.email_verified.is_some());

    let missing = repo
        .set_email_verified("ghost", Utc::now().naive_utc())
        .expect("should update nothing");
    assert_eq!(missing, 0);
}
