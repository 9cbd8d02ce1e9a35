mod cancellation;
mod collision;
mod provider_failures;
