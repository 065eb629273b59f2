use async_trait::async_trait;
use bytes::Bytes;
use purgesign_core::hash::base64_hmac_sha256;
use purgesign_core::{
    Context, Error, OsEnv, ProvideCredential, Result, SignRequest, SignedHeaders, Signer,
    SigningCredential, SigningRequest,
};

// Define a custom credential type
#[derive(Clone, Debug)]
struct MyCredential {
    api_key: String,
    api_secret: String,
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

// Implement a credential loader that loads from environment
#[derive(Debug)]
struct MyCredentialLoader;

#[async_trait]
impl ProvideCredential for MyCredentialLoader {
    type Credential = MyCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let api_key = ctx.env_var("MY_API_KEY").unwrap_or_default();
        let api_secret = ctx.env_var("MY_API_SECRET").unwrap_or_default();

        // For demo purposes, use dummy credentials if none are provided
        if api_key.is_empty() || api_secret.is_empty() {
            println!("No credentials found in environment, using demo credentials");
            return Ok(Some(MyCredential {
                api_key: "demo-api-key".to_string(),
                api_secret: "demo-api-secret".to_string(),
            }));
        }

        Ok(Some(MyCredential {
            api_key,
            api_secret,
        }))
    }
}

// Sign the path and body with the api secret
#[derive(Debug)]
struct MyRequestSigner;

impl SignRequest for MyRequestSigner {
    type Credential = MyCredential;

    fn sign_request(
        &self,
        req: &SigningRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<SignedHeaders> {
        let cred = credential.ok_or_else(|| Error::invalid_argument("no credential provided"))?;

        let mut content = req.path.as_bytes().to_vec();
        content.extend_from_slice(&req.body);
        let signature = base64_hmac_sha256(cred.api_secret.as_bytes(), &content)?;

        Ok(SignedHeaders::new(format!(
            "MY-HMAC key={};signature={signature}",
            cred.api_key
        )))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_env(OsEnv);
    let signer = Signer::new(ctx, MyCredentialLoader, MyRequestSigner);

    let req = SigningRequest::post(
        "https://api.example.com",
        "/v1/purge",
        Bytes::from_static(br#"{"objects":["/index.html"]}"#),
    );

    match signer.sign(&req).await {
        Ok(headers) => {
            println!("Request signed successfully!");
            println!("Headers: {:?}", headers.to_header_map()?);
        }
        Err(e) => {
            eprintln!("Failed to sign request: {}", e);
        }
    }

    Ok(())
}
