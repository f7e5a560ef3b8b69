use tokio::sync::oneshot;

use crate::domain::{Cart, ProductId, UpdateProductAmount};

/// Reply channel carried by every request.
pub type ServiceResponse<T> = oneshot::Sender<T>;

/// Typed messages for the cart service. Mutating requests reply with the cart
/// as it stands after the request was processed, whether or not it succeeded.
#[derive(Debug)]
pub enum CartRequest {
    GetCart {
        respond_to: ServiceResponse<Cart>,
    },
    AddProduct {
        product_id: ProductId,
        respond_to: ServiceResponse<Cart>,
    },
    RemoveProduct {
        product_id: ProductId,
        respond_to: ServiceResponse<Cart>,
    },
    UpdateProductAmount {
        update: UpdateProductAmount,
        respond_to: ServiceResponse<Cart>,
    },
    Shutdown,
}
