//! Tests for the appointment booking flow

use chrono::{Duration, Utc};
use hr_assistant_backend::appointments::AppointmentStore;
use hr_assistant_backend::error::AppError;
use hr_assistant_backend::store;
use tempfile::TempDir;

async fn open_store() -> (TempDir, AppointmentStore) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("appointments.db");
    let pool = store::open(path.to_str().unwrap()).await.unwrap();
    (dir, AppointmentStore::new(pool))
}

#[tokio::test]
async fn fresh_date_has_the_full_slot_grid_available() {
    let (_dir, appointments) = open_store().await;
    let date = Utc::now().date_naive() + Duration::days(1);

    let slots = appointments.slots_for("惩戒部", date).await.unwrap();
    assert_eq!(slots.len(), 16);
    assert!(slots.iter().all(|s| s.available));
}

#[tokio::test]
async fn booking_takes_the_slot_and_double_booking_is_rejected() {
    let (_dir, appointments) = open_store().await;
    let date = Utc::now().date_naive() + Duration::days(2);

    let booked = appointments
        .book("惩戒部", "堂吉诃德", date, "09:00-09:30", "张三")
        .await
        .unwrap();
    assert_eq!(booked.department, "惩戒部");
    assert_eq!(booked.slot, "09:00-09:30");

    let slots = appointments.slots_for("惩戒部", date).await.unwrap();
    let taken = slots.iter().find(|s| s.slot == "09:00-09:30").unwrap();
    assert!(!taken.available);

    let second = appointments
        .book("惩戒部", "涛哥", date, "09:00-09:30", "李四")
        .await;
    assert!(matches!(second, Err(AppError::SlotUnavailable(_))));

    // Same slot in another department is untouched.
    let other = appointments
        .book("控制部", "Malkuth", date, "09:00-09:30", "李四")
        .await;
    assert!(other.is_ok());
}

#[tokio::test]
async fn unknown_department_is_rejected() {
    let (_dir, appointments) = open_store().await;
    let date = Utc::now().date_naive() + Duration::days(1);

    let result = appointments
        .book("急诊科", "某人", date, "09:00-09:30", "张三")
        .await;
    assert!(matches!(result, Err(AppError::DepartmentNotFound(_))));

    let slots = appointments.slots_for("急诊科", date).await;
    assert!(matches!(slots, Err(AppError::DepartmentNotFound(_))));
}

#[tokio::test]
async fn dates_outside_the_booking_window_are_rejected() {
    let (_dir, appointments) = open_store().await;
    let today = Utc::now().date_naive();

    let past = appointments
        .book("控制部", "妮妮", today - Duration::days(1), "09:00-09:30", "张三")
        .await;
    assert!(matches!(past, Err(AppError::InvalidRequest(_))));

    let far = appointments
        .book("控制部", "妮妮", today + Duration::days(31), "09:00-09:30", "张三")
        .await;
    assert!(matches!(far, Err(AppError::InvalidRequest(_))));
}

#[tokio::test]
async fn unknown_slots_and_blank_names_are_rejected() {
    let (_dir, appointments) = open_store().await;
    let date = Utc::now().date_naive() + Duration::days(1);

    let bad_slot = appointments
        .book("控制部", "妮妮", date, "12:00-12:30", "张三")
        .await;
    assert!(matches!(bad_slot, Err(AppError::SlotUnavailable(_))));

    let blank_name = appointments
        .book("控制部", "妮妮", date, "09:00-09:30", "   ")
        .await;
    assert!(matches!(blank_name, Err(AppError::InvalidRequest(_))));
}

#[tokio::test]
async fn bookings_for_a_date_are_listed_in_slot_order() {
    let (_dir, appointments) = open_store().await;
    let date = Utc::now().date_naive() + Duration::days(3);

    appointments
        .book("安保部", "骨头哥", date, "15:00-15:30", "王五")
        .await
        .unwrap();
    appointments
        .book("安保部", "阿良", date, "08:00-08:30", "赵六")
        .await
        .unwrap();

    let bookings = appointments.bookings_for(date).await.unwrap();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].slot, "08:00-08:30");
    assert_eq!(bookings[1].slot, "15:00-15:30");
}
