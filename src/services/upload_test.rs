use super::*;
use crate::state::test_helpers;

#[tokio::test]
async fn store_and_fetch_round_trip() {
    let state = test_helpers::test_app_state();
    let stored = store_upload(&state, "dial.jpg", "image/jpeg", vec![0xff, 0xd8, 0xff])
        .await
        .unwrap();
    assert!(stored.url.starts_with("mem://"));
    assert_eq!(stored.size_bytes, 3);

    let fetched = get_upload(&state, stored.id).await.unwrap();
    assert_eq!(fetched.url, stored.url);
    assert_eq!(fetched.data, vec![0xff, 0xd8, 0xff]);
}

#[tokio::test]
async fn empty_payload_and_blank_filename_are_rejected() {
    let state = test_helpers::test_app_state();
    let empty = store_upload(&state, "dial.jpg", "image/jpeg", Vec::new()).await;
    assert!(matches!(empty.unwrap_err(), UploadError::Validation(_)));

    let unnamed = store_upload(&state, "  ", "image/jpeg", vec![1]).await;
    assert!(matches!(unnamed.unwrap_err(), UploadError::Validation(_)));
}

#[tokio::test]
async fn handles_are_unique_per_upload() {
    let state = test_helpers::test_app_state();
    let first = store_upload(&state, "a.jpg", "image/jpeg", vec![1]).await.unwrap();
    let second = store_upload(&state, "b.jpg", "image/jpeg", vec![2]).await.unwrap();
    assert_ne!(first.url, second.url);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn delete_releases_the_upload() {
    let state = test_helpers::test_app_state();
    let stored = store_upload(&state, "dial.jpg", "image/jpeg", vec![1, 2, 3])
        .await
        .unwrap();

    delete_upload(&state, stored.id).await.unwrap();
    assert!(matches!(
        get_upload(&state, stored.id).await.unwrap_err(),
        UploadError::NotFound(_)
    ));
    assert!(matches!(
        delete_upload(&state, stored.id).await.unwrap_err(),
        UploadError::NotFound(_)
    ));
}
