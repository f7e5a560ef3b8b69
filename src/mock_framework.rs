//! # Mock Framework
//!
//! Utilities for testing the cart in isolation.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then helpers like [`expect_add_product`] to assert on the request
//! and answer it. [`RecordingNotifier`] captures the notifications a real
//! service emits.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::clients::CartClient;
use crate::domain::{Cart, ProductId, UpdateProductAmount};
use crate::messages::{CartRequest, ServiceResponse};
use crate::notifications::{Notification, Notifier};

/// Creates a client whose requests land on a receiver the test controls.
///
/// # Testing Strategy
/// Code that only *uses* a [`CartClient`] does not need a running service.
/// The test plays the service: it reads each request off the receiver,
/// checks it, and answers through the enclosed responder.
pub fn create_mock_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartClient::new(sender), receiver)
}

/// Helper to verify that the next message is a GetCart request
pub async fn expect_get_cart(receiver: &mut mpsc::Receiver<CartRequest>) -> Option<ServiceResponse<Cart>> {
    match receiver.recv().await {
        Some(CartRequest::GetCart { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an AddProduct request
pub async fn expect_add_product(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(ProductId, ServiceResponse<Cart>)> {
    match receiver.recv().await {
        Some(CartRequest::AddProduct { product_id, respond_to }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a RemoveProduct request
pub async fn expect_remove_product(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(ProductId, ServiceResponse<Cart>)> {
    match receiver.recv().await {
        Some(CartRequest::RemoveProduct { product_id, respond_to }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateProductAmount request
pub async fn expect_update_product_amount(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(UpdateProductAmount, ServiceResponse<Cart>)> {
    match receiver.recv().await {
        Some(CartRequest::UpdateProductAmount { update, respond_to }) => Some((update, respond_to)),
        _ => None,
    }
}

/// Notifier that keeps every notification for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.received.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.lock().unwrap().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, ProductInfo};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move { client.add_product(ProductId(1)).await });

        let (product_id, responder) = expect_add_product(&mut receiver).await.expect("Expected AddProduct request");
        assert_eq!(product_id, ProductId(1));
        let cart = Cart::new()
            .with_product(Product::from_info(ProductInfo::new(1, "Shoe", 100.0, "x"), 1))
            .unwrap();
        responder.send(cart.clone()).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Ok(cart));
    }

    #[tokio::test]
    async fn test_mock_client_update_payload() {
        let (client, mut receiver) = create_mock_client(10);

        let update = UpdateProductAmount {
            product_id: ProductId(4),
            amount: 3,
        };
        let update_task = tokio::spawn(async move { client.update_product_amount(update).await });

        let (received, responder) = expect_update_product_amount(&mut receiver)
            .await
            .expect("Expected UpdateProductAmount request");
        assert_eq!(received, update);
        responder.send(Cart::new()).unwrap();

        assert_eq!(update_task.await.unwrap(), Ok(Cart::new()));
    }

    #[tokio::test]
    async fn test_dropped_responder_surfaces_as_client_error() {
        let (client, mut receiver) = create_mock_client(10);

        let remove_task = tokio::spawn(async move { client.remove_product(ProductId(2)).await });

        let (_, responder) = expect_remove_product(&mut receiver).await.expect("Expected RemoveProduct request");
        drop(responder);

        assert!(matches!(
            remove_task.await.unwrap(),
            Err(crate::error::ClientError::ServiceDropped(_))
        ));
    }

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notification::RemovalFailed);
        notifier.notify(Notification::OutOfStock);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::RemovalFailed, Notification::OutOfStock]
        );
    }
}
