/// Generate client methods with oneshot channel boilerplate and automatic tracing.
///
/// The service always answers, so the only failure a caller can see is the
/// service task being gone.
macro_rules! client_method {
    ($(#[$meta:meta])* $client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            $(#[$meta])*
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> std::result::Result<$return_type, $crate::error::ClientError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|e| $crate::error::ClientError::ServiceClosed(e.to_string()))?;

                response
                    .await
                    .map_err(|e| $crate::error::ClientError::ServiceDropped(e.to_string()))
            }
        }
    };
}
