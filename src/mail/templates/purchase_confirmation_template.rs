use crate::app::util::html::escape;

pub struct PurchaseConfirmation<'a> {
    pub customer_name: &'a str,
    pub customer_email: &'a str,
    pub transaction_id: &'a str,
    pub purchase_date: &'a str,
    pub amount: &'a str,
    pub product_name: &'a str,
    pub pdf_download_link: &'a str,
    pub template_download_link: &'a str,
}

pub fn purchase_confirmation_template(details: &PurchaseConfirmation) -> (String, String) {
    (
        "🎵 Tu Guía \"El Próximo Hit\" está lista".to_string(),
        format!(
            r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="margin:0;padding:0;background:#000000;color:#ffffff;font-family:'Space Grotesk',-apple-system,'Segoe UI',sans-serif;line-height:1.6;">
  <div style="background:#000000;padding:40px 20px;">
    <div style="max-width:600px;margin:0 auto;background:#111111;border:1px solid rgba(255,255,255,0.1);border-radius:16px;overflow:hidden;">
      <div style="background:linear-gradient(135deg,#FF0000 0%,#FF00FF 100%);padding:40px 30px;text-align:center;">
        <h1 style="margin:0;font-size:32px;letter-spacing:2px;text-transform:uppercase;">🎵 EL PRÓXIMO HIT</h1>
        <p style="margin:8px 0 0;font-size:12px;letter-spacing:4px;text-transform:uppercase;">Crea Tu Legado</p>
      </div>
      <div style="padding:40px 30px;">
        <h2 style="color:#FF00FF;text-transform:uppercase;">¡Gracias por tu compra!</h2>
        <p style="font-size:18px;">Hola <strong>{name}</strong>,</p>
        <p style="color:#cccccc;">Tu inversión en tu carrera musical acaba de comenzar. Estamos emocionados de que formes parte de la comunidad de <strong>El Próximo Hit</strong>.</p>
        <div style="background:rgba(255,0,255,0.05);border:1px solid rgba(255,0,255,0.2);border-radius:12px;padding:30px;margin:30px 0;">
          <h3 style="color:#FF00FF;text-transform:uppercase;letter-spacing:2px;">📥 Descarga tus recursos</h3>
          <p style="color:#cccccc;font-size:14px;">Haz clic en los botones para descargar tu guía y plantilla. Guarda estos links en un lugar seguro.</p>
          <a href="{pdf_link}" style="display:inline-block;background:#FF0000;color:#ffffff;text-decoration:none;padding:16px 32px;border-radius:8px;font-weight:700;margin:10px 10px 10px 0;">📄 Descargar Guía PDF</a>
          <a href="{template_link}" style="display:inline-block;background:#FF0000;color:#ffffff;text-decoration:none;padding:16px 32px;border-radius:8px;font-weight:700;margin:10px 10px 10px 0;">🎚️ Plantilla Pro Tools</a>
        </div>
        <div style="border:2px solid rgba(255,0,255,0.3);border-radius:12px;padding:25px;margin:30px 0;text-align:center;">
          <h3 style="color:#FF00FF;text-transform:uppercase;">🎁 Estás en el Giveaway</h3>
          <p style="color:#cccccc;font-size:14px;">Tu compra te da entrada automática para ganar una <strong>producción completa</strong> valorada en <strong>$2,500 USD</strong>. Incluye beat, mezcla y masterización profesional.</p>
        </div>
        <table style="width:100%;border:1px solid rgba(255,255,255,0.1);border-radius:8px;padding:20px;font-size:14px;">
          <tr><td style="color:#999999;">Producto:</td><td style="text-align:right;">{product}</td></tr>
          <tr><td style="color:#999999;">Monto:</td><td style="text-align:right;">{amount}</td></tr>
          <tr><td style="color:#999999;">Fecha:</td><td style="text-align:right;">{date}</td></tr>
          <tr><td style="color:#999999;">Email:</td><td style="text-align:right;">{email}</td></tr>
          <tr><td style="color:#999999;">ID de Transacción:</td><td style="text-align:right;font-family:monospace;font-size:11px;">{transaction_id}</td></tr>
        </table>
        <p style="color:#cccccc;text-align:center;margin-top:30px;"><strong>¿Tienes preguntas o necesitas ayuda?</strong><br>Responde a este correo y te asistiremos lo antes posible.</p>
      </div>
      <div style="background:#0a0a0a;padding:30px;text-align:center;border-top:1px solid rgba(255,255,255,0.1);">
        <p style="font-size:12px;color:#666666;">© El Próximo Hit. Todos los derechos reservados.<br>Este correo fue enviado porque completaste una compra en <a href="https://elproximohit.com" style="color:#FF00FF;">elproximohit.com</a></p>
        <p style="font-size:12px;">
          <a href="https://instagram.com/elproximohit" style="color:#999999;margin:0 10px;">Instagram</a>
          <a href="https://tiktok.com/@elproximohit" style="color:#999999;margin:0 10px;">TikTok</a>
          <a href="https://elproximohit.com" style="color:#999999;margin:0 10px;">Web</a>
        </p>
      </div>
    </div>
  </div>
</body>
</html>
"#,
            name = escape(details.customer_name),
            pdf_link = escape(details.pdf_download_link),
            template_link = escape(details.template_download_link),
            product = escape(details.product_name),
            amount = escape(details.amount),
            date = escape(details.purchase_date),
            email = escape(details.customer_email),
            transaction_id = escape(details.transaction_id),
        ),
    )
}
