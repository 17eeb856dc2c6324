use mosaic_codec::{decrypt_text, encrypt_text};

fn main() {
    let key = "session-key";
    let plaintext = "the quick brown fox jumps over the lazy dog";

    let ciphertext = encrypt_text(plaintext, key);
    println!("ciphertext: {ciphertext}");

    match decrypt_text(&ciphertext, key) {
        Ok(recovered) => println!("recovered: {recovered}"),
        Err(e) => eprintln!("decrypt failed: {e}"),
    }
}
