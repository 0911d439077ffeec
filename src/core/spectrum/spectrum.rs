use super::rgb::RGBSpectrum;

pub type Spectrum = RGBSpectrum;
