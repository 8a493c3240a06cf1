#![allow(missing_docs)]

pub(crate) mod data;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use data::{TestDataFile, sample_data_store, shared};
pub(crate) use form::{
    assert_form_input, assert_form_select, assert_form_submit_button_with_text,
    assert_hx_endpoint, must_get_form,
};
pub(crate) use html::{
    assert_valid_html, element_text, parse_html_document, parse_html_fragment, select_all_text,
};
pub(crate) use http::{assert_content_type, assert_hx_redirect, assert_status_ok};
