use chrono::NaiveDate;

use prenota::domain::booking::{BookingChanges, BookingRecord, NewBooking};
use prenota::domain::service::{NewService, Service, UpdateService};
use prenota::domain::types::{BookingStatus, DateRange, Role};
use prenota::domain::user::{NewUser, User};
use prenota::repository::errors::RepositoryError;
use prenota::repository::{
    BookingListQuery, BookingReader, BookingWriter, DieselRepository, ServiceReader,
    ServiceWriter, UserReader, UserWriter,
};

mod common;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn period(start: &str, end: &str) -> DateRange {
    DateRange::new(date(start), date(end)).unwrap()
}

fn seed_user(repo: &DieselRepository, username: &str) -> User {
    repo.create_user(&NewUser::new(
        username,
        &format!("{username}@example.com"),
        "hash".to_string(),
    ))
    .unwrap()
}

fn seed_service(repo: &DieselRepository, name: &str, capacity: i32, price: f64) -> Service {
    repo.create_service(&NewService {
        name: name.to_string(),
        description: String::new(),
        capacity,
        price,
        active: true,
    })
    .unwrap()
}

fn seed_booking(
    repo: &DieselRepository,
    user_id: i32,
    service_id: i32,
    start: &str,
    end: &str,
) -> BookingRecord {
    let range = period(start, end);
    repo.create_booking(&NewBooking {
        user_id,
        service_id,
        period: range,
        total_price: 50.0 * range.days() as f64,
        status: BookingStatus::Pending,
    })
    .unwrap()
}

#[test]
fn test_user_repository() {
    let test_db = common::TestDb::new("test_user_repository.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let created = seed_user(&repo, "mario");
    assert_eq!(created.role, Role::User);

    let by_name = repo.get_user_by_username("mario").unwrap().unwrap();
    assert_eq!(by_name.id, created.id);
    assert_eq!(by_name.email, "mario@example.com");

    assert!(repo.get_user_by_id(created.id).unwrap().is_some());
    assert!(repo.get_user_by_username("nobody").unwrap().is_none());

    let duplicate = repo.create_user(&NewUser::new(
        "mario",
        "other@example.com",
        "hash".to_string(),
    ));
    assert!(matches!(
        duplicate,
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[test]
fn test_service_repository_crud() {
    let test_db = common::TestDb::new("test_service_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let sauna = seed_service(&repo, "Sauna", 2, 50.0);
    let pool_service = seed_service(&repo, "Pool", 10, 15.0);

    let hidden = repo
        .update_service(
            pool_service.id,
            &UpdateService {
                active: Some(false),
                ..UpdateService::default()
            },
        )
        .unwrap();
    assert!(!hidden.active);

    let active_only = repo.list_services(false).unwrap();
    assert_eq!(active_only.len(), 1);
    assert_eq!(active_only[0].name, "Sauna");

    let all = repo.list_services(true).unwrap();
    assert_eq!(all.len(), 2);

    let updated = repo
        .update_service(
            sauna.id,
            &UpdateService {
                price: Some(60.0),
                ..UpdateService::default()
            },
        )
        .unwrap();
    assert_eq!(updated.price, 60.0);
    assert_eq!(updated.name, "Sauna");

    repo.delete_service(pool_service.id).unwrap();
    assert!(repo.get_service_by_id(pool_service.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_service(pool_service.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_booking_repository_crud() {
    let test_db = common::TestDb::new("test_booking_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let mario = seed_user(&repo, "mario");
    let anna = seed_user(&repo, "anna");
    let sauna = seed_service(&repo, "Sauna", 2, 50.0);

    let record = seed_booking(&repo, mario.id, sauna.id, "2025-09-01", "2025-09-03");
    assert_eq!(record.service_name, "Sauna");
    assert_eq!(record.username, "mario");
    assert_eq!(record.booking.total_price, 150.0);
    assert_eq!(record.booking.status, BookingStatus::Pending);

    seed_booking(&repo, anna.id, sauna.id, "2025-09-10", "2025-09-12");

    let everything = repo.list_bookings(BookingListQuery::new()).unwrap();
    assert_eq!(everything.len(), 2);

    let marios = repo
        .list_bookings(BookingListQuery::new().for_user(mario.id))
        .unwrap();
    assert_eq!(marios.len(), 1);
    assert_eq!(marios[0].username, "mario");

    let updated = repo
        .update_booking(
            record.booking.id,
            &BookingChanges {
                status: Some(BookingStatus::Confirmed),
                ..BookingChanges::default()
            },
        )
        .unwrap();
    assert_eq!(updated.booking.status, BookingStatus::Confirmed);
    assert_eq!(updated.booking.period, record.booking.period);

    repo.delete_booking(record.booking.id).unwrap();
    assert!(repo.get_booking_by_id(record.booking.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_booking(record.booking.id),
        Err(RepositoryError::NotFound)
    ));

    // The other booking is untouched by the delete.
    let remaining = repo.list_bookings(BookingListQuery::new()).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].username, "anna");
}

#[test]
fn test_overlap_counting() {
    let test_db = common::TestDb::new("test_overlap_counting.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let mario = seed_user(&repo, "mario");
    let sauna = seed_service(&repo, "Sauna", 2, 50.0);

    let first = seed_booking(&repo, mario.id, sauna.id, "2025-09-01", "2025-09-05");
    seed_booking(&repo, mario.id, sauna.id, "2025-09-04", "2025-09-06");
    let cancelled = seed_booking(&repo, mario.id, sauna.id, "2025-09-01", "2025-09-10");
    repo.update_booking(
        cancelled.booking.id,
        &BookingChanges {
            status: Some(BookingStatus::Cancelled),
            ..BookingChanges::default()
        },
    )
    .unwrap();

    // Both live bookings share days with 09-04..09-05; the cancelled one is
    // ignored.
    assert_eq!(
        repo.count_overlapping_bookings(sauna.id, &period("2025-09-04", "2025-09-05"), None)
            .unwrap(),
        2
    );

    // A disjoint period counts nothing.
    assert_eq!(
        repo.count_overlapping_bookings(sauna.id, &period("2025-09-20", "2025-09-22"), None)
            .unwrap(),
        0
    );

    // Touching only the shared boundary day still counts as overlap.
    assert_eq!(
        repo.count_overlapping_bookings(sauna.id, &period("2025-09-05", "2025-09-07"), None)
            .unwrap(),
        2
    );

    // Excluding the booking under edit removes it from its own count.
    assert_eq!(
        repo.count_overlapping_bookings(
            sauna.id,
            &period("2025-09-01", "2025-09-02"),
            Some(first.booking.id)
        )
        .unwrap(),
        0
    );
}
