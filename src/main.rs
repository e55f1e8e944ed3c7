use lambda_runtime::{Error, LambdaEvent, run, service_fn};

use sms_relay::{
    MessageSender, RelayConfig, SendResult, SendSmsEvent, SenderNumber, TwilioAuth, TwilioClient,
    handle,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();
    lambda_runtime::tracing::init_default_subscriber();

    // Built once per cold start; every invocation shares the same read-only sender.
    let config = RelayConfig::from_env();
    let auth = TwilioAuth::new(config.account_sid, config.auth_token);
    let from = SenderNumber::new(config.sender_number)?;
    let sender = MessageSender::new(TwilioClient::new(auth, from));
    let sender = &sender;

    run(service_fn(move |event: LambdaEvent<SendSmsEvent>| async move {
        Ok::<SendResult, Error>(handle(event.payload, sender).await)
    }))
    .await
}
