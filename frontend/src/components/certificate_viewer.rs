use yew::prelude::*;

use crate::certificate::CertificateData;

#[derive(Properties, PartialEq)]
pub struct CertificateViewerProps {
    pub on_close: Callback<()>,
    pub certificate: CertificateData,
}

#[function_component(CertificateViewer)]
pub fn certificate_viewer(props: &CertificateViewerProps) -> Html {
    let cert = &props.certificate;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-content modal-wide">
                <div class="modal-header">
                    <h2>{"Your Certificate"}</h2>
                    <button class="modal-close" onclick={close}>{"✕"}</button>
                </div>

                <div class="certificate">
                    <div class="certificate-award">{"🏅"}</div>
                    <h3>{"Certificate of Completion"}</h3>
                    <p>{"This certifies that"}</p>
                    <h4 class="certificate-name">{&cert.student_name}</h4>
                    <p>{"has successfully completed"}</p>
                    <h5 class="certificate-course">{&cert.course_name}</h5>

                    <div class="certificate-footer">
                        <div>
                            <p class="certificate-caption">{"Completion Date"}</p>
                            <p class="certificate-value">{cert.completion_date_label()}</p>
                        </div>
                        <div class="certificate-qr">
                            <div class="qr-placeholder">{"QR"}</div>
                            <p class="certificate-caption">{"Verify Online"}</p>
                        </div>
                        <div>
                            <p class="certificate-caption">{"Certificate ID"}</p>
                            <p class="certificate-value mono">{&cert.certificate_id}</p>
                        </div>
                    </div>
                </div>

                <div class="verification">
                    <h6>{"Verification Instructions"}</h6>
                    <p>{"This certificate can be verified by scanning the QR code or visiting:"}</p>
                    <p class="verification-url mono">{cert.verification_url()}</p>
                </div>

                <div class="certificate-actions">
                    <button class="primary-button">{"⬇ Download PDF"}</button>
                    <button class="secondary-button">{"⇪ Share Certificate"}</button>
                </div>
            </div>
            <style>
                {r#"
                .certificate {
                    background: linear-gradient(135deg, #eff6ff, #e0e7ff);
                    border: 2px solid #bfdbfe;
                    border-radius: 12px;
                    padding: 2rem;
                    margin-bottom: 1.5rem;
                    text-align: center;
                }
                .certificate-award {
                    font-size: 3.5rem;
                }
                .certificate h3 {
                    font-size: 1.8rem;
                    color: #111827;
                    margin: 0.5rem 0;
                }
                .certificate p {
                    color: #4b5563;
                }
                .certificate-name {
                    font-size: 1.5rem;
                    color: #2563eb;
                    margin: 0.5rem 0 1rem;
                }
                .certificate-course {
                    font-size: 1.2rem;
                    color: #111827;
                    margin: 0.5rem 0 1.5rem;
                }
                .certificate-footer {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                }
                .certificate-caption {
                    font-size: 0.8rem;
                    margin: 0;
                }
                .certificate-value {
                    font-weight: 600;
                    color: #374151;
                    margin: 0;
                }
                .certificate-qr {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 8px;
                    padding: 0.75rem;
                }
                .qr-placeholder {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 2px dashed #9ca3af;
                    color: #6b7280;
                    font-size: 0.75rem;
                    margin: 0 auto;
                }
                .verification {
                    background: #f9fafb;
                    border-radius: 8px;
                    padding: 1rem;
                    margin-bottom: 1.5rem;
                }
                .verification h6 {
                    font-size: 1rem;
                    margin: 0 0 0.5rem;
                    color: #111827;
                }
                .verification p {
                    font-size: 0.9rem;
                    color: #4b5563;
                }
                .verification-url {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 6px;
                    padding: 0.5rem;
                    color: #2563eb;
                    word-break: break-all;
                }
                .mono {
                    font-family: ui-monospace, monospace;
                }
                .certificate-actions {
                    display: flex;
                    gap: 0.75rem;
                }
                .certificate-actions button {
                    flex: 1;
                }
                "#}
            </style>
        </div>
    }
}
