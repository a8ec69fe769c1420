//! User-facing texts. The storefront is Indonesian-language.

// Cart
pub const INVALID_ITEM: &str = "Item tidak valid.";
pub const UNREADABLE_QUANTITY: &str = "Kuantitas tidak terbaca.";
pub const MIN_QUANTITY: &str = "Kuantitas minimal 1.";
pub const UPDATE_REJECTED: &str = "Gagal memperbarui kuantitas.";
pub const UPDATE_NETWORK: &str = "Terjadi kesalahan saat memperbarui kuantitas.";
pub const REMOVE_REJECTED: &str = "Gagal menghapus item.";
pub const REMOVE_NETWORK: &str = "Terjadi kesalahan saat menghapus item.";
pub const CLEAR_REJECTED: &str = "Gagal mengosongkan keranjang.";
pub const CLEAR_NETWORK: &str = "Terjadi kesalahan saat mengosongkan keranjang.";
pub const ADD_SUCCEEDED: &str = "Produk berhasil ditambahkan ke keranjang";
pub const ADD_REJECTED: &str = "Gagal menambahkan produk ke keranjang.";
pub const ADD_NETWORK: &str = "Terjadi kesalahan saat menambahkan produk.";

// Checkout
pub const SUMMARY_REJECTED: &str = "Gagal menghitung ringkasan";
pub const SUMMARY_NETWORK: &str = "Terjadi kesalahan saat menghitung ringkasan";

// Transfer
pub const SELECT_BANK_FIRST: &str = "Pilih bank terlebih dahulu";
pub const COPY_SUCCEEDED: &str = "Nomor rekening berhasil disalin!";
pub const COPY_FAILED: &str = "Gagal menyalin nomor rekening";
pub const ACCOUNT_HOLDER_PREFIX: &str = "a.n. ";

// Upload
pub const FILE_MISSING: &str = "File tidak ditemukan";
pub const FILE_TYPE_REJECTED: &str = "Format file tidak diizinkan";
pub const FILE_UNREADABLE: &str = "File tidak dapat dibaca";
pub const SELECT_FILE_FIRST: &str = "Pilih file terlebih dahulu";
pub const UPLOAD_BUSY_LABEL: &str = "Mengunggah...";
pub const UPLOAD_IDLE_LABEL: &str = "Kirim Bukti Pembayaran";
pub const UPLOAD_SUCCEEDED: &str = "Bukti pembayaran berhasil diunggah!";
pub const UPLOAD_REJECTED: &str = "Gagal mengunggah";
pub const UPLOAD_NETWORK: &str = "Terjadi kesalahan saat mengunggah";

pub fn file_too_large(max_mib: u64) -> String {
    format!("Ukuran file melebihi {max_mib}MB")
}
