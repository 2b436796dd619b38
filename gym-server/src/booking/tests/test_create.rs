use super::*;

#[tokio::test]
async fn test_create_booking_success() {
    let (engine, db) = test_engine().await;
    let date = date_in(7);
    let lesson_id = seed_lesson(&db, 5, weekday_of(date)).await;
    let membership_id = seed_membership(&db, "user-a", 10).await;

    let created = engine.create_booking("user-a", lesson_id, date).await.unwrap();

    assert_eq!(created.remaining_credits, 9);
    assert_eq!(created.booking.status, shared::models::BookingStatus::Confirmed);
    assert_eq!(created.booking.credits_used, 1);
    assert_eq!(created.qr_code.len(), 32);
    assert!(created.qr_code.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));

    // Persisted effects
    assert_eq!(membership_credits(&db, membership_id).await, 9);
    assert_eq!(booking_status_of(&db, created.booking.id).await, "confirmed");
    assert_eq!(token_status_of(&db, created.booking.id).await, "active");
    assert_eq!(active_count(&db, lesson_id, date).await, 1);

    let token = crate::db::qr_tokens::find_by_booking(&db.pool, created.booking.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(token.code, created.qr_code);
    assert_eq!(token.expires_at, midnight_after(date));
    assert!(token.used_at.is_none());
}

#[tokio::test]
async fn test_create_without_membership() {
    let (engine, db) = test_engine().await;
    let date = date_in(7);
    let lesson_id = seed_lesson(&db, 5, weekday_of(date)).await;

    let err = engine.create_booking("user-a", lesson_id, date).await.unwrap_err();

    assert!(matches!(err, BookingError::NoActiveMembership));
    assert_eq!(total_bookings(&db).await, 0);
}

#[tokio::test]
async fn test_create_with_lapsed_membership() {
    let (engine, db) = test_engine().await;
    let date = date_in(7);
    let lesson_id = seed_lesson(&db, 5, weekday_of(date)).await;
    // Active status but validity already over
    seed_membership_dates(
        &db,
        "user-a",
        10,
        today() - Duration::days(60),
        today() - Duration::days(1),
    )
    .await;

    let err = engine.create_booking("user-a", lesson_id, date).await.unwrap_err();

    assert!(matches!(err, BookingError::NoActiveMembership));
}

#[tokio::test]
async fn test_create_with_zero_credits() {
    let (engine, db) = test_engine().await;
    let date = date_in(7);
    let lesson_id = seed_lesson(&db, 5, weekday_of(date)).await;
    let membership_id = seed_membership(&db, "user-a", 0).await;

    let err = engine.create_booking("user-a", lesson_id, date).await.unwrap_err();

    assert!(matches!(err, BookingError::InsufficientCredits));
    assert_eq!(total_bookings(&db).await, 0);
    assert_eq!(membership_credits(&db, membership_id).await, 0);
}

#[tokio::test]
async fn test_create_unknown_lesson() {
    let (engine, db) = test_engine().await;
    seed_membership(&db, "user-a", 10).await;

    let err = engine.create_booking("user-a", 424242, date_in(7)).await.unwrap_err();

    assert!(matches!(err, BookingError::LessonNotFound(424242)));
}

#[tokio::test]
async fn test_create_inactive_lesson() {
    let (engine, db) = test_engine().await;
    let date = date_in(7);
    let lesson_id = seed_lesson(&db, 5, weekday_of(date)).await;
    seed_membership(&db, "user-a", 10).await;
    deactivate_lesson(&db, lesson_id).await;

    let err = engine.create_booking("user-a", lesson_id, date).await.unwrap_err();

    assert!(matches!(err, BookingError::LessonNotFound(_)));
}

#[tokio::test]
async fn test_create_wrong_weekday() {
    let (engine, db) = test_engine().await;
    let date = date_in(7);
    // Lesson runs on the following weekday
    let lesson_id = seed_lesson(&db, 5, (weekday_of(date) + 1) % 7).await;
    let membership_id = seed_membership(&db, "user-a", 10).await;

    let err = engine.create_booking("user-a", lesson_id, date).await.unwrap_err();

    assert!(matches!(err, BookingError::WrongDayOfWeek(_, _)));
    assert_eq!(membership_credits(&db, membership_id).await, 10);
}

#[tokio::test]
async fn test_create_today_rejected() {
    let (engine, db) = test_engine().await;
    let date = today();
    let lesson_id = seed_lesson(&db, 5, weekday_of(date)).await;
    seed_membership(&db, "user-a", 10).await;

    let err = engine.create_booking("user-a", lesson_id, date).await.unwrap_err();

    assert!(matches!(err, BookingError::DateNotInFuture(_)));
}

#[tokio::test]
async fn test_create_past_date_rejected() {
    let (engine, db) = test_engine().await;
    let date = today() - Duration::days(7);
    let lesson_id = seed_lesson(&db, 5, weekday_of(date)).await;
    seed_membership(&db, "user-a", 10).await;

    let err = engine.create_booking("user-a", lesson_id, date).await.unwrap_err();

    assert!(matches!(err, BookingError::DateNotInFuture(_)));
}

#[tokio::test]
async fn test_create_full_lesson() {
    let (engine, db) = test_engine().await;
    let date = date_in(7);
    let lesson_id = seed_lesson(&db, 1, weekday_of(date)).await;
    let membership_id = seed_membership(&db, "user-a", 10).await;
    seed_booking(&db, "user-b", lesson_id, date, "confirmed").await;

    let err = engine.create_booking("user-a", lesson_id, date).await.unwrap_err();

    assert!(matches!(err, BookingError::LessonFull(_, _)));
    assert_eq!(membership_credits(&db, membership_id).await, 10);
    assert_eq!(active_count(&db, lesson_id, date).await, 1);
}

#[tokio::test]
async fn test_create_duplicate_rejected() {
    let (engine, db) = test_engine().await;
    let date = date_in(7);
    let lesson_id = seed_lesson(&db, 5, weekday_of(date)).await;
    let membership_id = seed_membership(&db, "user-a", 10).await;

    engine.create_booking("user-a", lesson_id, date).await.unwrap();
    let err = engine.create_booking("user-a", lesson_id, date).await.unwrap_err();

    assert!(matches!(err, BookingError::DuplicateBooking(_)));
    // Only the first booking debited
    assert_eq!(membership_credits(&db, membership_id).await, 9);
    assert_eq!(active_count(&db, lesson_id, date).await, 1);
}

#[tokio::test]
async fn test_cancelled_booking_frees_the_seat() {
    let (engine, db) = test_engine().await;
    let date = date_in(7);
    let lesson_id = seed_lesson(&db, 1, weekday_of(date)).await;
    seed_membership(&db, "user-a", 10).await;
    seed_booking(&db, "user-b", lesson_id, date, "cancelled").await;

    let created = engine.create_booking("user-a", lesson_id, date).await.unwrap();

    assert_eq!(booking_status_of(&db, created.booking.id).await, "confirmed");
    assert_eq!(active_count(&db, lesson_id, date).await, 1);
}

#[tokio::test]
async fn test_completed_and_no_show_still_hold_seats() {
    let (engine, db) = test_engine().await;
    let date = date_in(7);
    let lesson_id = seed_lesson(&db, 2, weekday_of(date)).await;
    seed_membership(&db, "user-a", 10).await;
    seed_booking(&db, "user-b", lesson_id, date, "completed").await;
    seed_booking(&db, "user-c", lesson_id, date, "no-show").await;

    let err = engine.create_booking("user-a", lesson_id, date).await.unwrap_err();

    assert!(matches!(err, BookingError::LessonFull(_, _)));
}

#[tokio::test]
async fn test_check_availability_reports_spots() {
    let (engine, db) = test_engine().await;
    let date = date_in(7);
    let lesson_id = seed_lesson(&db, 3, weekday_of(date)).await;
    seed_booking(&db, "user-b", lesson_id, date, "confirmed").await;

    let availability = engine.check_availability(lesson_id, date).await.unwrap();

    assert_eq!(availability.current_bookings, 1);
    assert_eq!(availability.available_spots, 2);
    assert_eq!(availability.lesson.id, lesson_id);
}
