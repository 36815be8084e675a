use crate::domain::ports::Dialer;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Terminal stand-in for the phone dialer: prints the `tel:` link.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDialer;

#[async_trait]
impl Dialer for ConsoleDialer {
    async fn dial(&self, uri: &str) -> Result<()> {
        println!("📞 {}", uri);
        Ok(())
    }
}
